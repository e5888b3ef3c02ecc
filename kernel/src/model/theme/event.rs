use derive_new::new;

#[derive(new)]
pub struct CreateTheme {
    pub name: String,
    pub description: String,
    pub price: i32,
}
