use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::entity::users::UserType;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

// Query strings can't go through `#[serde(flatten)]` without losing numeric
// parsing, so each filter struct repeats the paging fields.
macro_rules! paged {
    ($ty:ty) => {
        impl $ty {
            pub fn pagination(&self) -> Pagination {
                Pagination {
                    page: self.page,
                    per_page: self.per_page,
                }
            }
        }
    };
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeatQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub show_room: Option<i32>,
    pub seat_category: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub show_room: Option<i32>,
    pub booking_status: Option<bool>,
    /// Ordering by `movie_time`, default ascending.
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    #[serde(rename = "type")]
    pub user_type: Option<UserType>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub user: Option<i32>,
    pub movie_details: Option<i32>,
    pub show_room: Option<i32>,
}

paged!(SeatQuery);
paged!(MovieQuery);
paged!(UserQuery);
paged!(BookingQuery);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_clamps() {
        assert_eq!(Pagination::default().normalize(), (1, 20, 0));

        let p = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(p.normalize(), (1, 100, 0));

        let p = Pagination {
            page: Some(3),
            per_page: Some(10),
        };
        assert_eq!(p.normalize(), (3, 10, 20));
    }

    #[test]
    fn huge_page_saturates_offset() {
        let p = Pagination {
            page: Some(i64::MAX),
            per_page: Some(20),
        };
        assert_eq!(p.normalize(), (i64::MAX, 20, i64::MAX));
    }

    #[test]
    fn filter_queries_carry_paging() {
        let q = SeatQuery {
            page: Some(2),
            per_page: Some(5),
            ..Default::default()
        };
        assert_eq!(q.pagination().normalize(), (2, 5, 5));
    }
}
