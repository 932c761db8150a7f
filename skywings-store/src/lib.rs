pub mod app_config;
pub mod booking_repo;
pub mod customer_repo;
pub mod database;
pub mod error;
pub mod fleet_repo;
pub mod flight_repo;
pub mod memory;
pub mod pg_repo;
pub mod redis_repo;
pub mod staff_repo;

use std::sync::Arc;

use skywings_core::repository::{Repositories, StaffRepository};
use skywings_shared::models::{
    Aircraft, Airline, Airport, Booking, Customer, Employee, Fare, FeedBack, Flight,
    Notification, Payment, Seat, WaitList,
};
use sqlx::PgPool;
use tracing::info;

pub use app_config::{Config, StorageBackend, StorageConfig};
pub use database::DbClient;
pub use error::{StoreError, StoreResult};
pub use memory::{memory_repositories, MemoryRepository, MemoryStaffRepository};
pub use pg_repo::PgRepository;
pub use redis_repo::RedisClient;
pub use staff_repo::PostgresStaffRepository;

pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        airlines: Arc::new(PgRepository::<Airline>::new(pool.clone())),
        aircraft: Arc::new(PgRepository::<Aircraft>::new(pool.clone())),
        airports: Arc::new(PgRepository::<Airport>::new(pool.clone())),
        employees: Arc::new(PgRepository::<Employee>::new(pool.clone())),
        flights: Arc::new(PgRepository::<Flight>::new(pool.clone())),
        fares: Arc::new(PgRepository::<Fare>::new(pool.clone())),
        seats: Arc::new(PgRepository::<Seat>::new(pool.clone())),
        bookings: Arc::new(PgRepository::<Booking>::new(pool.clone())),
        payments: Arc::new(PgRepository::<Payment>::new(pool.clone())),
        customers: Arc::new(PgRepository::<Customer>::new(pool.clone())),
        notifications: Arc::new(PgRepository::<Notification>::new(pool.clone())),
        feedback: Arc::new(PgRepository::<FeedBack>::new(pool.clone())),
        waitlists: Arc::new(PgRepository::<WaitList>::new(pool.clone())),
    }
}

async fn connect(storage: &StorageConfig) -> StoreResult<DbClient> {
    let db = DbClient::new(&storage.url, storage.max_connections).await?;
    if storage.migrate {
        db.migrate().await?;
    }
    Ok(db)
}

/// Tables served by database-api on the configured backend.
pub async fn open_repositories(storage: &StorageConfig) -> StoreResult<Repositories> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(memory_repositories())
        }
        StorageBackend::Postgres => {
            let db = connect(storage).await?;
            info!("Connected to Postgres");
            Ok(postgres_repositories(&db.pool))
        }
    }
}

/// The employee-ms table on the configured backend.
pub async fn open_staff_repository(storage: &StorageConfig) -> StoreResult<Arc<dyn StaffRepository>> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(Arc::new(MemoryStaffRepository::default()))
        }
        StorageBackend::Postgres => {
            let db = connect(storage).await?;
            info!("Connected to Postgres");
            Ok(Arc::new(PostgresStaffRepository::new(db.pool)))
        }
    }
}
