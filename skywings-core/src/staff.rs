use std::collections::BTreeMap;
use std::sync::Arc;

use skywings_shared::dto::StaffMemberDto;
use skywings_shared::models::StaffMember;
use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::registration::staff_from_dto;
use crate::repository::StaffRepository;
use crate::{CoreError, CoreResult};

const EMAIL_IN_USE: &str = "Email already in use";

/// CRUD for the standalone employee-ms service.
#[derive(Clone)]
pub struct StaffService {
    repo: Arc<dyn StaffRepository>,
}

impl StaffService {
    pub fn new(repo: Arc<dyn StaffRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, dto: StaffMemberDto) -> CoreResult<StaffMember> {
        dto.validate().map_err(field_errors)?;

        if self.repo.find_by_email(&dto.email).await?.is_some() {
            return Err(CoreError::ValidationError(EMAIL_IN_USE.to_string()));
        }

        let member = self.repo.insert(staff_from_dto(dto)).await?;
        info!("Created staff member {}", member.id);
        Ok(member)
    }

    pub async fn get(&self, id: i64) -> CoreResult<StaffMember> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("employee", id))
    }

    pub async fn list(&self) -> CoreResult<Vec<StaffMember>> {
        self.repo.list().await
    }

    /// Overwrites every field. A blank status keeps the current one.
    pub async fn update(&self, id: i64, dto: StaffMemberDto) -> CoreResult<StaffMember> {
        let existing = self.get(id).await?;
        dto.validate().map_err(field_errors)?;

        if dto.email != existing.email {
            if let Some(other) = self.repo.find_by_email(&dto.email).await? {
                if other.id != id {
                    return Err(CoreError::ValidationError(EMAIL_IN_USE.to_string()));
                }
            }
        }

        let status = dto
            .status
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(existing.status);

        let member = StaffMember {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            role: dto.role,
            status,
        };
        self.repo.update(member).await
    }

    pub async fn delete(&self, id: i64) -> CoreResult<()> {
        if !self.repo.delete(id).await? {
            return Err(CoreError::not_found("employee", id));
        }
        info!("Deleted staff member {}", id);
        Ok(())
    }
}

/// Flatten validator output into `camelCaseField -> message`.
pub fn field_errors(errors: ValidationErrors) -> CoreError {
    let mut fields = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        let message = errs
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "is invalid".to_string());
        fields.insert(camel_case(&field), message);
    }
    CoreError::FieldErrors(fields)
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct VecStaff(Mutex<Vec<StaffMember>>);

    #[async_trait]
    impl StaffRepository for VecStaff {
        async fn list(&self) -> CoreResult<Vec<StaffMember>> {
            Ok(self.0.lock().unwrap().clone())
        }

        async fn get(&self, id: i64) -> CoreResult<Option<StaffMember>> {
            Ok(self.0.lock().unwrap().iter().find(|m| m.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> CoreResult<Option<StaffMember>> {
            Ok(self.0.lock().unwrap().iter().find(|m| m.email == email).cloned())
        }

        async fn insert(&self, mut member: StaffMember) -> CoreResult<StaffMember> {
            let mut rows = self.0.lock().unwrap();
            member.id = rows.len() as i64 + 1;
            rows.push(member.clone());
            Ok(member)
        }

        async fn update(&self, member: StaffMember) -> CoreResult<StaffMember> {
            let mut rows = self.0.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|m| m.id == member.id)
                .ok_or_else(|| CoreError::not_found("employee", member.id))?;
            *row = member.clone();
            Ok(member)
        }

        async fn delete(&self, id: i64) -> CoreResult<bool> {
            let mut rows = self.0.lock().unwrap();
            let before = rows.len();
            rows.retain(|m| m.id != id);
            Ok(rows.len() != before)
        }
    }

    fn dto(email: &str) -> StaffMemberDto {
        StaffMemberDto {
            first_name: "Ravi".to_string(),
            last_name: "Kumar".to_string(),
            email: email.to_string(),
            role: "Engineer".to_string(),
            ..Default::default()
        }
    }

    fn service() -> StaffService {
        StaffService::new(Arc::new(VecStaff::default()))
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(camel_case("email"), "email");
    }

    #[tokio::test]
    async fn test_create_defaults_status_and_rejects_duplicates() {
        let service = service();
        let member = service.create(dto("ravi@corp.in")).await.unwrap();
        assert_eq!(member.id, 1);
        assert_eq!(member.status, "ACTIVE");

        let err = service.create(dto("ravi@corp.in")).await.unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Email already in use");
    }

    #[tokio::test]
    async fn test_validation_errors_use_wire_names() {
        let service = service();
        let mut bad = dto("nope");
        bad.first_name = "".to_string();

        match service.create(bad).await.unwrap_err() {
            CoreError::FieldErrors(fields) => {
                assert_eq!(fields.get("email").map(String::as_str), Some("email should be valid"));
                assert_eq!(
                    fields.get("firstName").map(String::as_str),
                    Some("firstName cannot be blank")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_status_and_checks_email() {
        let service = service();
        let first = service.create(dto("a@corp.in")).await.unwrap();
        service.create(dto("b@corp.in")).await.unwrap();

        let mut change = dto("a@corp.in");
        change.last_name = "Sharma".to_string();
        let updated = service.update(first.id, change).await.unwrap();
        assert_eq!(updated.last_name, "Sharma");
        assert_eq!(updated.status, "ACTIVE");

        let err = service.update(first.id, dto("b@corp.in")).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_missing_member() {
        let service = service();
        let err = service.get(99).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee not found with id: 99");
        assert!(service.delete(99).await.is_err());
    }
}
