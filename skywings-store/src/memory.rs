//! In-memory backend for local runs and tests. Rows keep insertion order and
//! deletes never cascade.

use std::sync::Arc;

use async_trait::async_trait;
use skywings_core::repository::{
    CustomerRepository, FlightRepository, Repositories, Repository, StaffRepository,
};
use skywings_core::{CoreError, CoreResult};
use skywings_shared::models::{
    Aircraft, Airline, Airport, Booking, Customer, Employee, Entity, Fare, FeedBack, Flight,
    Notification, Payment, Seat, StaffMember, WaitList,
};
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct MemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> MemoryRepository<T> {
    async fn filter(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.read().await.iter().filter(|r| keep(r)).cloned().collect()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> CoreResult<Vec<T>> {
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> CoreResult<Option<T>> {
        Ok(self.rows.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, item: T) -> CoreResult<T> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id() == item.id()) {
            return Err(CoreError::Conflict(format!("{} {} already exists", T::KIND, item.id())));
        }
        rows.push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: T) -> CoreResult<T> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.id() == item.id())
            .ok_or_else(|| CoreError::not_found(T::KIND, item.id()))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> CoreResult<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() != before)
    }
}

#[async_trait]
impl CustomerRepository for MemoryRepository<Customer> {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
        Ok(self.filter(|c| c.email == email).await.into_iter().next())
    }
}

#[async_trait]
impl FlightRepository for MemoryRepository<Flight> {
    async fn list_by_aircraft(&self, aircraft_id: Uuid) -> CoreResult<Vec<Flight>> {
        Ok(self.filter(|f| f.aircraft_id == Some(aircraft_id)).await)
    }
}

pub fn memory_repositories() -> Repositories {
    Repositories {
        airlines: Arc::new(MemoryRepository::<Airline>::default()),
        aircraft: Arc::new(MemoryRepository::<Aircraft>::default()),
        airports: Arc::new(MemoryRepository::<Airport>::default()),
        employees: Arc::new(MemoryRepository::<Employee>::default()),
        flights: Arc::new(MemoryRepository::<Flight>::default()),
        fares: Arc::new(MemoryRepository::<Fare>::default()),
        seats: Arc::new(MemoryRepository::<Seat>::default()),
        bookings: Arc::new(MemoryRepository::<Booking>::default()),
        payments: Arc::new(MemoryRepository::<Payment>::default()),
        customers: Arc::new(MemoryRepository::<Customer>::default()),
        notifications: Arc::new(MemoryRepository::<Notification>::default()),
        feedback: Arc::new(MemoryRepository::<FeedBack>::default()),
        waitlists: Arc::new(MemoryRepository::<WaitList>::default()),
    }
}

#[derive(Default)]
struct StaffTable {
    next_id: i64,
    rows: Vec<StaffMember>,
}

#[derive(Default)]
pub struct MemoryStaffRepository {
    table: RwLock<StaffTable>,
}

#[async_trait]
impl StaffRepository for MemoryStaffRepository {
    async fn list(&self) -> CoreResult<Vec<StaffMember>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn get(&self, id: i64) -> CoreResult<Option<StaffMember>> {
        Ok(self.table.read().await.rows.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<StaffMember>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn insert(&self, mut member: StaffMember) -> CoreResult<StaffMember> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        member.id = table.next_id;
        table.rows.push(member.clone());
        Ok(member)
    }

    async fn update(&self, member: StaffMember) -> CoreResult<StaffMember> {
        let mut table = self.table.write().await;
        let slot = table
            .rows
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| CoreError::not_found("employee", member.id))?;
        *slot = member.clone();
        Ok(member)
    }

    async fn delete(&self, id: i64) -> CoreResult<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|m| m.id != id);
        Ok(table.rows.len() != before)
    }
}
