//! database-api operations. Plain list/get/delete go straight through the
//! generic helpers; everything that resolves parents or merges fields lives
//! on [`RecordService`].

use chrono::Utc;
use skywings_shared::dto::{BookingRequest, BookingUpdate};
use skywings_shared::models::{
    Aircraft, Airline, Airport, Booking, Customer, Employee, EmployeeRole, Entity, Fare, FeedBack,
    Flight, Notification, Payment, PaymentStatus, Seat, WaitList,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::repository::{Repositories, Repository};
use crate::{CoreError, CoreResult};

/// Fetch a row or fail with `NotFound`.
pub async fn find<T, R>(repo: &R, id: Uuid) -> CoreResult<T>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    repo.get(id)
        .await?
        .ok_or_else(|| CoreError::not_found(T::KIND, id))
}

/// Insert under a freshly generated id; any id in the body is discarded.
pub async fn create<T, R>(repo: &R, mut item: T) -> CoreResult<T>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    item.set_id(Uuid::new_v4());
    let created = repo.insert(item).await?;
    debug!("Created {} {}", T::KIND, created.id());
    Ok(created)
}

pub async fn remove<T, R>(repo: &R, id: Uuid) -> CoreResult<()>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    if !repo.delete(id).await? {
        return Err(CoreError::not_found(T::KIND, id));
    }
    info!("Deleted {} {}", T::KIND, id);
    Ok(())
}

pub fn check_rating(rating: Option<i32>) -> CoreResult<()> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(CoreError::ValidationError(format!(
            "rating must be between 1 and 5, got {}",
            r
        ))),
        _ => Ok(()),
    }
}

fn require_ref(value: Option<Uuid>, field: &str) -> CoreResult<Uuid> {
    value.ok_or_else(|| CoreError::ValidationError(format!("{} is required", field)))
}

#[derive(Clone)]
pub struct RecordService {
    repos: Repositories,
}

impl RecordService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub fn repos(&self) -> &Repositories {
        &self.repos
    }

    // Airline, airport, fare: whole-row overwrites.

    pub async fn update_airline(&self, id: Uuid, mut airline: Airline) -> CoreResult<Airline> {
        find(&*self.repos.airlines, id).await?;
        airline.airline_id = id;
        self.repos.airlines.update(airline).await
    }

    pub async fn update_airport(&self, id: Uuid, mut airport: Airport) -> CoreResult<Airport> {
        find(&*self.repos.airports, id).await?;
        airport.airport_id = id;
        self.repos.airports.update(airport).await
    }

    pub async fn update_fare(&self, id: Uuid, mut fare: Fare) -> CoreResult<Fare> {
        find(&*self.repos.fares, id).await?;
        fare.fare_id = id;
        self.repos.fares.update(fare).await
    }

    // Aircraft

    pub async fn create_aircraft(&self, airline_id: Uuid, mut aircraft: Aircraft) -> CoreResult<Aircraft> {
        find(&*self.repos.airlines, airline_id).await?;
        aircraft.airline_id = Some(airline_id);
        create(&*self.repos.aircraft, aircraft).await
    }

    pub async fn update_aircraft(&self, id: Uuid, body: Aircraft) -> CoreResult<Aircraft> {
        let mut aircraft = find(&*self.repos.aircraft, id).await?;
        aircraft.aircraft_number = body.aircraft_number;
        aircraft.aircraft_type = body.aircraft_type;
        aircraft.capacity = body.capacity;
        aircraft.configuration = body.configuration;
        if let Some(airline_id) = body.airline_id {
            find(&*self.repos.airlines, airline_id).await?;
            aircraft.airline_id = Some(airline_id);
        }
        self.repos.aircraft.update(aircraft).await
    }

    pub async fn flights_for_aircraft(&self, aircraft_id: Uuid) -> CoreResult<Vec<Flight>> {
        find(&*self.repos.aircraft, aircraft_id).await?;
        self.repos.flights.list_by_aircraft(aircraft_id).await
    }

    // Flight

    pub async fn create_flight(
        &self,
        origin_id: Uuid,
        destination_id: Uuid,
        airline_id: Uuid,
        aircraft_id: Uuid,
        mut flight: Flight,
    ) -> CoreResult<Flight> {
        find(&*self.repos.airports, origin_id).await?;
        find(&*self.repos.airports, destination_id).await?;
        find(&*self.repos.airlines, airline_id).await?;
        find(&*self.repos.aircraft, aircraft_id).await?;

        flight.origin_airport_id = Some(origin_id);
        flight.destination_airport_id = Some(destination_id);
        flight.airline_id = Some(airline_id);
        flight.aircraft_id = Some(aircraft_id);
        create(&*self.repos.flights, flight).await
    }

    pub async fn update_flight(&self, id: Uuid, body: Flight) -> CoreResult<Flight> {
        let mut flight = find(&*self.repos.flights, id).await?;
        flight.departure = body.departure;
        flight.arrival = body.arrival;
        flight.price = body.price;
        flight.status = body.status;

        if let Some(origin) = body.origin_airport_id {
            find(&*self.repos.airports, origin).await?;
            flight.origin_airport_id = Some(origin);
        }
        if let Some(destination) = body.destination_airport_id {
            find(&*self.repos.airports, destination).await?;
            flight.destination_airport_id = Some(destination);
        }
        if let Some(airline_id) = body.airline_id {
            find(&*self.repos.airlines, airline_id).await?;
            flight.airline_id = Some(airline_id);
        }
        if let Some(aircraft_id) = body.aircraft_id {
            find(&*self.repos.aircraft, aircraft_id).await?;
            flight.aircraft_id = Some(aircraft_id);
        }
        self.repos.flights.update(flight).await
    }

    // Seat

    pub async fn create_seat(&self, flight_id: Uuid, fare_id: Uuid, mut seat: Seat) -> CoreResult<Seat> {
        find(&*self.repos.flights, flight_id).await?;
        find(&*self.repos.fares, fare_id).await?;
        seat.flight_id = Some(flight_id);
        seat.fare_id = Some(fare_id);
        create(&*self.repos.seats, seat).await
    }

    pub async fn update_seat(&self, id: Uuid, body: Seat) -> CoreResult<Seat> {
        let mut seat = find(&*self.repos.seats, id).await?;
        seat.seat_number = body.seat_number;
        seat.seat_class = body.seat_class;
        seat.seat_type = body.seat_type;
        seat.seat_status = body.seat_status;
        if let Some(fare_id) = body.fare_id {
            find(&*self.repos.fares, fare_id).await?;
            seat.fare_id = Some(fare_id);
        }
        if let Some(flight_id) = body.flight_id {
            find(&*self.repos.flights, flight_id).await?;
            seat.flight_id = Some(flight_id);
        }
        self.repos.seats.update(seat).await
    }

    // Booking and payment

    pub async fn create_booking(&self, request: BookingRequest) -> CoreResult<Booking> {
        let customer_id = require_ref(request.customer_id, "customerId")?;
        let flight_id = require_ref(request.flight_id, "flightId")?;
        let seat_id = require_ref(request.seat_id, "seatId")?;

        find(&*self.repos.customers, customer_id).await?;
        find(&*self.repos.flights, flight_id).await?;
        find(&*self.repos.seats, seat_id).await?;

        let booking = Booking {
            booking_id: Uuid::nil(),
            booking_time: Some(Utc::now()),
            pnr_number: request.pnr_number,
            booking_status: request.booking_status,
            customer_id: Some(customer_id),
            flight_id: Some(flight_id),
            seat_id: Some(seat_id),
            payment_id: None,
        };
        let booking = create(&*self.repos.bookings, booking).await?;

        match request.payment {
            Some(payment) => self.attach_payment(booking, payment).await,
            None => Ok(booking),
        }
    }

    pub async fn update_booking(&self, id: Uuid, body: BookingUpdate) -> CoreResult<Booking> {
        let mut booking = find(&*self.repos.bookings, id).await?;
        booking.booking_status = body.booking_status;
        booking.pnr_number = body.pnr_number;
        let booking = self.repos.bookings.update(booking).await?;

        match body.payment {
            Some(payment) => self.attach_payment(booking, payment).await,
            None => Ok(booking),
        }
    }

    /// Always stores a new payment; the booking is repointed at it.
    pub async fn create_payment(&self, booking_id: Uuid, payment: Payment) -> CoreResult<Payment> {
        let mut booking = find(&*self.repos.bookings, booking_id).await?;
        let payment = self.store_payment(booking_id, payment).await?;
        booking.payment_id = Some(payment.payment_id);
        self.repos.bookings.update(booking).await?;
        Ok(payment)
    }

    pub async fn update_payment(&self, id: Uuid, body: Payment) -> CoreResult<Payment> {
        let mut payment = find(&*self.repos.payments, id).await?;
        payment.amount = body.amount;
        payment.method = body.method;
        payment.payment_status = body.payment_status;
        payment.txn_reference = body.txn_reference;
        self.repos.payments.update(payment).await
    }

    async fn store_payment(&self, booking_id: Uuid, mut payment: Payment) -> CoreResult<Payment> {
        payment.booking_id = Some(booking_id);
        if payment.payment_status.is_none() {
            payment.payment_status = Some(PaymentStatus::default());
        }
        create(&*self.repos.payments, payment).await
    }

    /// Inline payment on a booking body: replaces the booking's current
    /// payment when it has one, otherwise stores a new one.
    async fn attach_payment(&self, mut booking: Booking, mut payment: Payment) -> CoreResult<Booking> {
        let existing = match booking.payment_id {
            Some(payment_id) => self.repos.payments.get(payment_id).await?,
            None => None,
        };
        let payment = match existing {
            Some(current) => {
                payment.payment_id = current.payment_id;
                payment.booking_id = Some(booking.booking_id);
                if payment.payment_status.is_none() {
                    payment.payment_status = Some(PaymentStatus::default());
                }
                self.repos.payments.update(payment).await?
            }
            None => self.store_payment(booking.booking_id, payment).await?,
        };

        booking.payment_id = Some(payment.payment_id);
        self.repos.bookings.update(booking).await
    }

    // Customer

    pub async fn customer_by_email(&self, email: &str) -> CoreResult<Customer> {
        self.repos
            .customers
            .find_by_email(email)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Customer not found with email: {}", email)))
    }

    pub async fn update_customer(&self, id: Uuid, body: Customer) -> CoreResult<Customer> {
        let mut customer = find(&*self.repos.customers, id).await?;
        customer.name = body.name;
        customer.email = body.email;
        customer.phone = body.phone;
        customer.address = body.address;
        customer.wallet_balance = body.wallet_balance;
        customer.loyalty_points = body.loyalty_points;
        customer.role = body.role;
        customer.password = body.password;
        self.repos.customers.update(customer).await
    }

    // Employee

    pub async fn create_employee(&self, airline_id: Uuid, mut employee: Employee) -> CoreResult<Employee> {
        find(&*self.repos.airlines, airline_id).await?;
        employee.airline_id = Some(airline_id);
        create(&*self.repos.employees, employee).await
    }

    pub async fn create_admin(&self, mut employee: Employee) -> CoreResult<Employee> {
        if let Some(airline_id) = employee.airline_id {
            find(&*self.repos.airlines, airline_id).await?;
        }
        employee.employee_role = Some(EmployeeRole::Admin);
        create(&*self.repos.employees, employee).await
    }

    pub async fn update_employee(&self, id: Uuid, body: Employee) -> CoreResult<Employee> {
        let mut employee = find(&*self.repos.employees, id).await?;
        employee.name = body.name;
        employee.email = body.email;
        employee.phone = body.phone;
        employee.address = body.address;
        employee.employee_role = body.employee_role;
        employee.status = body.status;
        if let Some(airline_id) = body.airline_id {
            find(&*self.repos.airlines, airline_id).await?;
            employee.airline_id = Some(airline_id);
        }
        self.repos.employees.update(employee).await
    }

    // Customer-owned records

    pub async fn create_notification(
        &self,
        customer_id: Uuid,
        mut notification: Notification,
    ) -> CoreResult<Notification> {
        find(&*self.repos.customers, customer_id).await?;
        notification.customer_id = Some(customer_id);
        notification.sent_at = Some(Utc::now());
        create(&*self.repos.notifications, notification).await
    }

    pub async fn update_notification(&self, id: Uuid, body: Notification) -> CoreResult<Notification> {
        let mut notification = find(&*self.repos.notifications, id).await?;
        notification.notification_type = body.notification_type;
        notification.message = body.message;
        notification.status = body.status;
        if let Some(customer_id) = body.customer_id {
            find(&*self.repos.customers, customer_id).await?;
            notification.customer_id = Some(customer_id);
        }
        self.repos.notifications.update(notification).await
    }

    pub async fn create_feedback(
        &self,
        customer_id: Uuid,
        flight_id: Uuid,
        mut feedback: FeedBack,
    ) -> CoreResult<FeedBack> {
        check_rating(feedback.rating)?;
        find(&*self.repos.customers, customer_id).await?;
        find(&*self.repos.flights, flight_id).await?;
        feedback.customer_id = Some(customer_id);
        feedback.flight_id = Some(flight_id);
        feedback.created_at = Some(Utc::now());
        create(&*self.repos.feedback, feedback).await
    }

    pub async fn update_feedback(&self, id: Uuid, body: FeedBack) -> CoreResult<FeedBack> {
        check_rating(body.rating)?;
        let mut feedback = find(&*self.repos.feedback, id).await?;
        feedback.rating = body.rating;
        feedback.comments = body.comments;
        if let Some(customer_id) = body.customer_id {
            find(&*self.repos.customers, customer_id).await?;
            feedback.customer_id = Some(customer_id);
        }
        if let Some(flight_id) = body.flight_id {
            find(&*self.repos.flights, flight_id).await?;
            feedback.flight_id = Some(flight_id);
        }
        self.repos.feedback.update(feedback).await
    }

    pub async fn create_waitlist(
        &self,
        customer_id: Uuid,
        flight_id: Uuid,
        mut entry: WaitList,
    ) -> CoreResult<WaitList> {
        find(&*self.repos.customers, customer_id).await?;
        find(&*self.repos.flights, flight_id).await?;
        entry.customer_id = Some(customer_id);
        entry.flight_id = Some(flight_id);
        create(&*self.repos.waitlists, entry).await
    }

    pub async fn update_waitlist(&self, id: Uuid, body: WaitList) -> CoreResult<WaitList> {
        let mut entry = find(&*self.repos.waitlists, id).await?;
        entry.position = body.position;
        entry.status = body.status;
        if let Some(customer_id) = body.customer_id {
            find(&*self.repos.customers, customer_id).await?;
            entry.customer_id = Some(customer_id);
        }
        if let Some(flight_id) = body.flight_id {
            find(&*self.repos.flights, flight_id).await?;
            entry.flight_id = Some(flight_id);
        }
        self.repos.waitlists.update(entry).await
    }
}
