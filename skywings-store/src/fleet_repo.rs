use skywings_shared::models::{Aircraft, Airline, Airport, Employee};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::pg_repo::{parse_column, PgQuery, PgRecord};

#[derive(FromRow)]
pub struct AirlineRow {
    airline_id: Uuid,
    name: String,
    official_name: Option<String>,
    official_email: Option<String>,
    official_phone: Option<String>,
    address: Option<String>,
    company_size: Option<String>,
    logo: Option<String>,
    status: Option<String>,
}

impl PgRecord for Airline {
    type Row = AirlineRow;

    const TABLE: &'static str = "airlines";
    const COLUMNS: &'static [&'static str] = &[
        "airline_id",
        "name",
        "official_name",
        "official_email",
        "official_phone",
        "address",
        "company_size",
        "logo",
        "status",
    ];

    fn from_row(row: AirlineRow) -> StoreResult<Self> {
        Ok(Airline {
            airline_id: row.airline_id,
            name: row.name,
            official_name: row.official_name,
            official_email: row.official_email,
            official_phone: row.official_phone,
            address: row.address,
            company_size: parse_column("airline", row.company_size)?,
            logo: row.logo,
            status: row.status,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.official_name.clone())
            .bind(self.official_email.clone())
            .bind(self.official_phone.clone())
            .bind(self.address.clone())
            .bind(self.company_size.map(|s| s.as_str()))
            .bind(self.logo.clone())
            .bind(self.status.clone())
    }
}

#[derive(FromRow)]
pub struct AircraftRow {
    aircraft_id: Uuid,
    aircraft_number: Option<String>,
    aircraft_type: Option<String>,
    capacity: Option<i32>,
    configuration: Option<String>,
    airline_id: Option<Uuid>,
}

impl PgRecord for Aircraft {
    type Row = AircraftRow;

    const TABLE: &'static str = "aircraft";
    const COLUMNS: &'static [&'static str] = &[
        "aircraft_id",
        "aircraft_number",
        "aircraft_type",
        "capacity",
        "configuration",
        "airline_id",
    ];

    fn from_row(row: AircraftRow) -> StoreResult<Self> {
        Ok(Aircraft {
            aircraft_id: row.aircraft_id,
            aircraft_number: row.aircraft_number,
            aircraft_type: row.aircraft_type,
            capacity: row.capacity,
            configuration: row.configuration,
            airline_id: row.airline_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.aircraft_number.clone())
            .bind(self.aircraft_type.clone())
            .bind(self.capacity)
            .bind(self.configuration.clone())
            .bind(self.airline_id)
    }
}

#[derive(FromRow)]
pub struct AirportRow {
    airport_id: Uuid,
    airport_code: String,
    name: String,
    city: Option<String>,
    country: Option<String>,
}

impl PgRecord for Airport {
    type Row = AirportRow;

    const TABLE: &'static str = "airports";
    const COLUMNS: &'static [&'static str] = &["airport_id", "airport_code", "name", "city", "country"];

    fn from_row(row: AirportRow) -> StoreResult<Self> {
        Ok(Airport {
            airport_id: row.airport_id,
            airport_code: row.airport_code,
            name: row.name,
            city: row.city,
            country: row.country,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.airport_code.clone())
            .bind(self.name.clone())
            .bind(self.city.clone())
            .bind(self.country.clone())
    }
}

#[derive(FromRow)]
pub struct EmployeeRow {
    employee_id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    employee_role: Option<String>,
    status: Option<String>,
    airline_id: Option<Uuid>,
}

impl PgRecord for Employee {
    type Row = EmployeeRow;

    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = &[
        "employee_id",
        "name",
        "email",
        "phone",
        "address",
        "employee_role",
        "status",
        "airline_id",
    ];

    fn from_row(row: EmployeeRow) -> StoreResult<Self> {
        Ok(Employee {
            employee_id: row.employee_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            employee_role: parse_column("employee", row.employee_role)?,
            status: row.status,
            airline_id: row.airline_id,
        })
    }

    fn bind_fields<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.phone.clone())
            .bind(self.address.clone())
            .bind(self.employee_role.map(|r| r.as_str()))
            .bind(self.status.clone())
            .bind(self.airline_id)
    }
}
