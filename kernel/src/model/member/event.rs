use derive_new::new;

#[derive(new)]
pub struct CreateMember {
    pub username: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}
