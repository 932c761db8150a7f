use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a wire enum stored as text. Parsing is case-insensitive so
/// `"admin"` and `"ADMIN"` both resolve.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ParseEnumError { kind: $kind, value: s.to_string() }),
                }
            }
        }
    };
}

string_enum!(
    /// Role carried by a customer record and embedded in auth tokens.
    Role, "role" {
        Customer => "CUSTOMER",
        Admin => "ADMIN",
    }
);

string_enum!(
    EmployeeRole, "employee role" {
        Admin => "ADMIN",
        Manager => "MANAGER",
        Staff => "STAFF",
    }
);

string_enum!(
    CompanySize, "company size" {
        Small => "SMALL",
        Medium => "MEDIUM",
        Large => "LARGE",
    }
);

string_enum!(
    SeatClass, "seat class" {
        Economy => "ECONOMY",
        PremiumEconomy => "PREMIUM_ECONOMY",
        Business => "BUSINESS",
        First => "FIRST",
    }
);

string_enum!(
    SeatStatus, "seat status" {
        Available => "AVAILABLE",
        Reserved => "RESERVED",
        Booked => "BOOKED",
    }
);

string_enum!(
    BookingStatus, "booking status" {
        Pending => "PENDING",
        Confirmed => "CONFIRMED",
        Cancelled => "CANCELLED",
    }
);

string_enum!(
    PaymentStatus, "payment status" {
        Pending => "PENDING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Refunded => "REFUNDED",
    }
);

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("admin".parse::<EmployeeRole>().unwrap(), EmployeeRole::Admin);
        assert_eq!(" Manager ".parse::<EmployeeRole>().unwrap(), EmployeeRole::Manager);
        assert_eq!("premium_economy".parse::<SeatClass>().unwrap(), SeatClass::PremiumEconomy);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "pilot".parse::<EmployeeRole>().unwrap_err();
        assert_eq!(err.kind, "employee role");
        assert_eq!(err.to_string(), "unknown employee role value: pilot");
    }

    #[test]
    fn test_wire_format_matches_text() {
        assert_eq!(serde_json::to_string(&SeatClass::PremiumEconomy).unwrap(), "\"PREMIUM_ECONOMY\"");
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"CUSTOMER\"");
        assert_eq!(PaymentStatus::default().as_str(), "PENDING");
    }
}
