use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::MemberId,
    member::{event::CreateMember, Member},
    role::Role,
};
use kernel::repository::member::MemberRepository;
use shared::error::{AppError, AppResult};

use super::{InMemoryDatabase, MemberRecord};
use crate::repository::member::hash_password;

#[derive(new)]
pub struct InMemoryMemberRepository {
    db: InMemoryDatabase,
}

impl InMemoryMemberRepository {
    async fn insert(&self, event: CreateMember, role: Role) -> AppResult<Option<Member>> {
        let password_hash = hash_password(&event.password)?;
        let mut tables = self.db.tables.lock().await;
        if tables
            .members
            .iter()
            .any(|m| m.member.username == event.username)
        {
            return Ok(None);
        }

        let member = Member {
            member_id: MemberId::new(),
            username: event.username,
            name: event.name,
            phone: event.phone,
            role,
        };
        tables.members.push(MemberRecord {
            member: member.clone(),
            password_hash,
        });
        Ok(Some(member))
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, event: CreateMember) -> AppResult<Member> {
        let username = event.username.clone();
        self.insert(event, Role::User)
            .await?
            .ok_or(AppError::DuplicateUsername(username))
    }

    async fn find_current_member(&self, member_id: MemberId) -> AppResult<Option<Member>> {
        let tables = self.db.tables.lock().await;
        Ok(tables
            .members
            .iter()
            .find(|m| m.member.member_id == member_id)
            .map(|m| m.member.clone()))
    }

    async fn ensure_admin(&self, event: CreateMember) -> AppResult<()> {
        self.insert(event, Role::Admin).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(username: &str) -> CreateMember {
        CreateMember::new(
            username.into(),
            "password".into(),
            "name".into(),
            "010-1234-5678".into(),
        )
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() -> anyhow::Result<()> {
        let repo = InMemoryMemberRepository::new(InMemoryDatabase::new());

        let member = repo.create(event("username")).await?;
        assert_eq!(member.role, Role::User);
        assert!(matches!(
            repo.create(event("username")).await,
            Err(AppError::DuplicateUsername(_))
        ));
        assert_eq!(
            repo.find_current_member(member.member_id).await?,
            Some(member)
        );
        Ok(())
    }

    #[tokio::test]
    async fn ensure_admin_keeps_the_first_account() -> anyhow::Result<()> {
        let db = InMemoryDatabase::new();
        let repo = InMemoryMemberRepository::new(db.clone());

        repo.ensure_admin(event("admin")).await?;
        repo.ensure_admin(event("admin")).await?;

        let tables = db.tables.lock().await;
        assert_eq!(tables.members.len(), 1);
        assert!(tables.members[0].member.is_admin());
        Ok(())
    }
}
