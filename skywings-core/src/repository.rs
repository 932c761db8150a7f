use std::sync::Arc;

use async_trait::async_trait;
use skywings_shared::models::{
    Aircraft, Airline, Airport, Booking, Customer, Employee, Entity, Fare, FeedBack, Flight,
    Notification, Payment, Seat, StaffMember, WaitList,
};
use uuid::Uuid;

use crate::CoreResult;

/// CRUD access to one database-api table.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn list(&self) -> CoreResult<Vec<T>>;

    async fn get(&self, id: Uuid) -> CoreResult<Option<T>>;

    /// Persist a new row. The id on `item` is used as given.
    async fn insert(&self, item: T) -> CoreResult<T>;

    /// Overwrite an existing row; `NotFound` when the id is unknown.
    async fn update(&self, item: T) -> CoreResult<T>;

    /// Returns false when nothing was deleted.
    async fn delete(&self, id: Uuid) -> CoreResult<bool>;
}

#[async_trait]
pub trait CustomerRepository: Repository<Customer> {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>>;
}

#[async_trait]
pub trait FlightRepository: Repository<Flight> {
    async fn list_by_aircraft(&self, aircraft_id: Uuid) -> CoreResult<Vec<Flight>>;
}

/// Storage of the standalone employee-ms service.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn list(&self) -> CoreResult<Vec<StaffMember>>;

    async fn get(&self, id: i64) -> CoreResult<Option<StaffMember>>;

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<StaffMember>>;

    /// Persist a new member; the id is assigned by the store.
    async fn insert(&self, member: StaffMember) -> CoreResult<StaffMember>;

    async fn update(&self, member: StaffMember) -> CoreResult<StaffMember>;

    async fn delete(&self, id: i64) -> CoreResult<bool>;
}

/// Every table database-api serves, behind trait objects so the Postgres
/// and in-memory backends are interchangeable.
#[derive(Clone)]
pub struct Repositories {
    pub airlines: Arc<dyn Repository<Airline>>,
    pub aircraft: Arc<dyn Repository<Aircraft>>,
    pub airports: Arc<dyn Repository<Airport>>,
    pub employees: Arc<dyn Repository<Employee>>,
    pub flights: Arc<dyn FlightRepository>,
    pub fares: Arc<dyn Repository<Fare>>,
    pub seats: Arc<dyn Repository<Seat>>,
    pub bookings: Arc<dyn Repository<Booking>>,
    pub payments: Arc<dyn Repository<Payment>>,
    pub customers: Arc<dyn CustomerRepository>,
    pub notifications: Arc<dyn Repository<Notification>>,
    pub feedback: Arc<dyn Repository<FeedBack>>,
    pub waitlists: Arc<dyn Repository<WaitList>>,
}
