//! DTO to entity mapping for the registration flows.

use skywings_shared::dto::{AirlineDetailsDto, CustomerDetails, EmployeeDto, StaffMemberDto};
use skywings_shared::models::{Airline, Customer, Employee, EmployeeRole, Role, StaffMember};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

pub const ACTIVE: &str = "ACTIVE";
pub const DEFAULT_LOGO: &str = "logo";

pub fn airline_from_details(dto: &AirlineDetailsDto) -> Airline {
    Airline {
        airline_id: Uuid::nil(),
        name: dto.name.clone(),
        official_name: dto.official_name.clone(),
        official_email: dto.official_email.clone(),
        official_phone: dto.official_phone.clone(),
        address: dto.address.clone(),
        company_size: None,
        logo: Some(DEFAULT_LOGO.to_string()),
        status: Some(ACTIVE.to_string()),
    }
}

pub fn admin_from_details(dto: &AirlineDetailsDto, airline_id: Uuid) -> Employee {
    Employee {
        employee_id: Uuid::nil(),
        name: dto.admin_name.clone(),
        email: dto.admin_email.clone(),
        phone: dto.admin_phone.clone(),
        address: dto.address.clone(),
        employee_role: Some(EmployeeRole::Admin),
        status: Some(ACTIVE.to_string()),
        airline_id: Some(airline_id),
    }
}

/// The submitted status is ignored; new employees always start active.
pub fn employee_from_dto(dto: &EmployeeDto, airline_id: Uuid) -> CoreResult<Employee> {
    let role = dto
        .employee_role
        .parse::<EmployeeRole>()
        .map_err(|e| CoreError::ValidationError(e.to_string()))?;

    Ok(Employee {
        employee_id: Uuid::nil(),
        name: dto.name.clone(),
        email: dto.email.clone(),
        phone: dto.phone.clone(),
        address: dto.address.clone(),
        employee_role: Some(role),
        status: Some(ACTIVE.to_string()),
        airline_id: Some(airline_id),
    })
}

pub fn customer_from_details(dto: CustomerDetails) -> Customer {
    Customer {
        name: dto.name,
        email: dto.email,
        phone: dto.phone,
        address: dto.address,
        role: Some(Role::Customer),
        ..Default::default()
    }
}

/// Blank or missing status falls back to `ACTIVE`.
pub fn staff_from_dto(dto: StaffMemberDto) -> StaffMember {
    let status = dto
        .status
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| ACTIVE.to_string());

    StaffMember {
        id: dto.id.unwrap_or_default(),
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
        role: dto.role,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> AirlineDetailsDto {
        AirlineDetailsDto {
            name: "IndiGo".to_string(),
            official_name: Some("InterGlobe Aviation".to_string()),
            admin_name: "Meera".to_string(),
            admin_email: "meera@indigo.in".to_string(),
            admin_phone: Some("+91-9000000000".to_string()),
            address: Some("Gurugram".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_airline_defaults() {
        let airline = airline_from_details(&details());
        assert_eq!(airline.status.as_deref(), Some("ACTIVE"));
        assert_eq!(airline.logo.as_deref(), Some("logo"));
        assert_eq!(airline.official_name.as_deref(), Some("InterGlobe Aviation"));
    }

    #[test]
    fn test_admin_carries_address_and_airline() {
        let airline_id = Uuid::new_v4();
        let admin = admin_from_details(&details(), airline_id);
        assert_eq!(admin.employee_role, Some(EmployeeRole::Admin));
        assert_eq!(admin.address.as_deref(), Some("Gurugram"));
        assert_eq!(admin.airline_id, Some(airline_id));
    }

    #[test]
    fn test_employee_role_and_status() {
        let dto = EmployeeDto {
            name: "Kiran".to_string(),
            email: "kiran@indigo.in".to_string(),
            employee_role: "manager".to_string(),
            status: Some("SUSPENDED".to_string()),
            ..Default::default()
        };
        let employee = employee_from_dto(&dto, Uuid::new_v4()).unwrap();
        assert_eq!(employee.employee_role, Some(EmployeeRole::Manager));
        assert_eq!(employee.status.as_deref(), Some("ACTIVE"));

        let bad = EmployeeDto {
            employee_role: "pilot".to_string(),
            ..dto
        };
        assert!(matches!(
            employee_from_dto(&bad, Uuid::new_v4()),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn test_staff_status_fallback() {
        let member = staff_from_dto(StaffMemberDto {
            status: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(member.status, "ACTIVE");

        let member = staff_from_dto(StaffMemberDto {
            status: Some("ON_LEAVE".to_string()),
            ..Default::default()
        });
        assert_eq!(member.status, "ON_LEAVE");
    }
}
