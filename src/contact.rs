//! Contact data and its presentation, kept apart.

/// Holds contact data only; rendering lives in [`ContactCard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub phone: String,
}

/// Renders a [`Person`] for console output.
pub struct ContactCard;

impl ContactCard {
    pub fn render(person: &Person) -> String {
        format!("Name - {}\nPhone number - {}", person.name, person.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_phone_lines() {
        let person = Person {
            name: "John".to_string(),
            phone: "123-456-7890".to_string(),
        };
        assert_eq!(
            ContactCard::render(&person),
            "Name - John\nPhone number - 123-456-7890"
        );
    }
}
