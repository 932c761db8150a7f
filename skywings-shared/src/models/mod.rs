pub mod airline;
pub mod booking;
pub mod customer;
pub mod enums;
pub mod flight;
pub mod staff;

pub use airline::{Aircraft, Airline, Airport, Employee};
pub use booking::{Booking, Payment};
pub use customer::{Customer, FeedBack, Notification, WaitList};
pub use enums::{
    BookingStatus, CompanySize, EmployeeRole, ParseEnumError, PaymentStatus, Role, SeatClass,
    SeatStatus,
};
pub use flight::{Fare, Flight, Seat};
pub use staff::StaffMember;

use uuid::Uuid;

/// A record owned by database-api and keyed by a generated UUID.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular name used in error messages and log lines.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
}

macro_rules! entity {
    ($ty:ty, $kind:literal, $field:ident) => {
        impl Entity for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> Uuid {
                self.$field
            }

            fn set_id(&mut self, id: Uuid) {
                self.$field = id;
            }
        }
    };
}

entity!(Airline, "airline", airline_id);
entity!(Aircraft, "aircraft", aircraft_id);
entity!(Airport, "airport", airport_id);
entity!(Employee, "employee", employee_id);
entity!(Flight, "flight", flight_id);
entity!(Fare, "fare", fare_id);
entity!(Seat, "seat", seat_id);
entity!(Booking, "booking", booking_id);
entity!(Payment, "payment", payment_id);
entity!(Customer, "customer", customer_id);
entity!(Notification, "notification", notification_id);
entity!(FeedBack, "feedback", feedback_id);
entity!(WaitList, "waitlist", waitlist_id);
