use crate::models::{booking::BookingRequest, error::ValidationError};

pub const MIN_NAME_LENGTH: usize = 2;

/// Outcome of the three independent input checks. All three are always evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub name_valid: bool,
    pub email_valid: bool,
    pub ticket_count_valid: bool,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.name_valid && self.email_valid && self.ticket_count_valid
    }

    /// One error per failing check, in name, email, ticket count order.
    pub fn errors(&self, requested: u32) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !self.name_valid {
            errors.push(ValidationError::NameTooShort);
        }
        if !self.email_valid {
            errors.push(ValidationError::InvalidEmail);
        }
        if !self.ticket_count_valid {
            errors.push(ValidationError::InvalidTicketCount { requested });
        }
        errors
    }
}

pub fn validate(request: &BookingRequest, remaining: u32) -> Validation {
    Validation {
        name_valid: is_valid_name(&request.first_name) && is_valid_name(&request.last_name),
        email_valid: is_valid_email(&request.email),
        ticket_count_valid: is_valid_ticket_count(request.ticket_count, remaining),
    }
}

fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LENGTH
}

fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

fn is_valid_ticket_count(requested: u32, remaining: u32) -> bool {
    requested > 0 && requested <= remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(first: &str, last: &str, email: &str, tickets: u32) -> BookingRequest {
        BookingRequest::new(first, last, email, tickets)
    }

    #[test]
    fn test_name_length_boundaries() {
        assert!(!validate(&request("A", "Li", "a@b", 1), 10).name_valid);
        assert!(!validate(&request("Al", "L", "a@b", 1), 10).name_valid);
        assert!(!validate(&request("", "", "a@b", 1), 10).name_valid);
        assert!(validate(&request("Al", "Li", "a@b", 1), 10).name_valid);
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // one char, two bytes
        assert!(!validate(&request("É", "Li", "a@b", 1), 10).name_valid);
        assert!(validate(&request("Éa", "Lü", "a@b", 1), 10).name_valid);
    }

    #[test]
    fn test_email_needs_at_sign() {
        assert!(validate(&request("Al", "Li", "a@b", 1), 10).email_valid);
        assert!(validate(&request("Al", "Li", "@", 1), 10).email_valid);
        assert!(!validate(&request("Al", "Li", "ab", 1), 10).email_valid);
        assert!(!validate(&request("Al", "Li", "", 1), 10).email_valid);
    }

    #[test]
    fn test_ticket_count_range() {
        let check = |tickets| {
            validate(&request("Al", "Li", "a@b", tickets), 10).ticket_count_valid
        };
        assert!(!check(0));
        assert!(check(5));
        assert!(check(10));
        assert!(!check(11));
    }

    #[test]
    fn test_all_failures_reported() {
        let validation = validate(&request("A", "L", "bad-email", 0), 10);
        assert!(!validation.is_valid());
        assert_eq!(
            vec![
                ValidationError::NameTooShort,
                ValidationError::InvalidEmail,
                ValidationError::InvalidTicketCount { requested: 0 },
            ],
            validation.errors(0)
        );
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        let validation = validate(&request("Al", "Li", "al@x.com", 3), 50);
        assert!(validation.is_valid());
        assert!(validation.errors(3).is_empty());
    }
}
