use serde::{Deserialize, Deserializer};

pub mod bookings;
pub mod menu_items;
pub mod movies;
pub mod seat_categories;
pub mod seats;
pub mod show_rooms;
pub mod users;

/// Keeps "field absent" (`None`) apart from "field is null" (`Some(None)`)
/// so partial updates can clear a nullable foreign key.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::menu_items::UpdateMenuItemRequest;

    #[test]
    fn absent_and_null_parent_are_distinct() {
        let absent: UpdateMenuItemRequest = serde_json::from_str(r#"{"name":"Home"}"#).unwrap();
        assert_eq!(absent.parent_id, None);

        let null: UpdateMenuItemRequest = serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(null.parent_id, Some(None));

        let set: UpdateMenuItemRequest = serde_json::from_str(r#"{"parent_id":4}"#).unwrap();
        assert_eq!(set.parent_id, Some(Some(4)));
    }
}
