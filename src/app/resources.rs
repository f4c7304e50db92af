//! Authenticated loaders used by the list and form pages.
//!
//! Each reads the bearer token from the session first and fails with
//! `ApiError::MissingToken` before any request when it is absent.

use chrono::NaiveDate;

use crate::app::api::{
    ApiError, HotelApi, Reservation, ReservationForm, RoomType, RoomTypeForm,
};
use crate::app::auth::{is_valid_email, SessionStore};

/// Date format used by `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn bearer(session: &SessionStore) -> Result<String, ApiError> {
    session.token().ok_or(ApiError::MissingToken)
}

pub async fn load_room_types(
    api: &dyn HotelApi,
    session: &SessionStore,
) -> Result<Vec<RoomType>, ApiError> {
    let token = bearer(session)?;
    api.room_types(&token).await
}

pub async fn load_room_type(
    api: &dyn HotelApi,
    session: &SessionStore,
    id: i64,
) -> Result<RoomType, ApiError> {
    let token = bearer(session)?;
    api.room_type(&token, id).await
}

/// Create when `id` is `None`, otherwise update
pub async fn save_room_type(
    api: &dyn HotelApi,
    session: &SessionStore,
    id: Option<i64>,
    form: &RoomTypeForm,
) -> Result<RoomType, ApiError> {
    let token = bearer(session)?;
    match id {
        Some(id) => api.update_room_type(&token, id, form).await,
        None => api.create_room_type(&token, form).await,
    }
}

pub async fn load_reservations(
    api: &dyn HotelApi,
    session: &SessionStore,
) -> Result<Vec<Reservation>, ApiError> {
    let token = bearer(session)?;
    api.reservations(&token).await
}

pub async fn load_reservation(
    api: &dyn HotelApi,
    session: &SessionStore,
    id: i64,
) -> Result<Reservation, ApiError> {
    let token = bearer(session)?;
    api.reservation(&token, id).await
}

/// Create when `id` is `None`, otherwise update
pub async fn save_reservation(
    api: &dyn HotelApi,
    session: &SessionStore,
    id: Option<i64>,
    form: &ReservationForm,
) -> Result<Reservation, ApiError> {
    let token = bearer(session)?;
    match id {
        Some(id) => api.update_reservation(&token, id, form).await,
        None => api.create_reservation(&token, form).await,
    }
}

// =============================================================================
// Form validation
// =============================================================================

pub fn validate_room_type(form: &RoomTypeForm) -> Result<(), String> {
    if form.name.trim().is_empty() {
        return Err("Name is required".into());
    }
    if !form.rate.is_finite() || form.rate < 0.0 {
        return Err("Rate must be zero or more".into());
    }
    Ok(())
}

/// Editable reservation fields as typed into the form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationDraft {
    pub guest_email: String,
    pub room_type_id: Option<i64>,
    /// `YYYY-MM-DD`
    pub check_in_date: String,
    pub number_of_nights: u32,
}

impl From<Reservation> for ReservationDraft {
    fn from(r: Reservation) -> Self {
        Self {
            guest_email: r.guest_email,
            room_type_id: Some(r.room_type_id),
            check_in_date: r.check_in_date.format(DATE_INPUT_FORMAT).to_string(),
            number_of_nights: r.number_of_nights,
        }
    }
}

impl ReservationDraft {
    pub fn new() -> Self {
        Self {
            number_of_nights: 1,
            ..Self::default()
        }
    }

    pub fn to_form(&self) -> Result<ReservationForm, String> {
        let guest_email = self.guest_email.trim();
        if !is_valid_email(guest_email) {
            return Err("Guest email is not a valid address".into());
        }
        let room_type_id = self.room_type_id.ok_or("Choose a room type")?;
        let check_in_date = NaiveDate::parse_from_str(self.check_in_date.trim(), DATE_INPUT_FORMAT)
            .map_err(|_| "Check-in date must be YYYY-MM-DD".to_string())?;
        if self.number_of_nights == 0 {
            return Err("Stay must be at least one night".into());
        }
        Ok(ReservationForm {
            guest_email: guest_email.to_string(),
            room_type_id,
            check_in_date,
            number_of_nights: self.number_of_nights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReservationDraft {
        ReservationDraft {
            guest_email: " guest@hotel.test ".into(),
            room_type_id: Some(4),
            check_in_date: "2024-12-24".into(),
            number_of_nights: 2,
        }
    }

    #[test]
    fn draft_converts_to_form() {
        let form = draft().to_form().unwrap();
        assert_eq!(form.guest_email, "guest@hotel.test");
        assert_eq!(form.room_type_id, 4);
        assert_eq!(
            form.check_in_date,
            NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()
        );
    }

    #[test]
    fn draft_rejects_incomplete_input() {
        let mut d = draft();
        d.room_type_id = None;
        assert_eq!(d.to_form().unwrap_err(), "Choose a room type");

        let mut d = draft();
        d.check_in_date = "24/12/2024".into();
        assert!(d.to_form().is_err());

        let mut d = draft();
        d.number_of_nights = 0;
        assert!(d.to_form().is_err());

        let mut d = draft();
        d.guest_email = "guest".into();
        assert!(d.to_form().is_err());
    }

    #[test]
    fn draft_prefills_from_reservation() {
        let r = Reservation {
            id: 9,
            guest_email: "g@hotel.test".into(),
            room_type_id: 2,
            check_in_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            number_of_nights: 3,
        };
        let d = ReservationDraft::from(r);
        assert_eq!(d.check_in_date, "2025-01-05");
        assert_eq!(d.room_type_id, Some(2));
    }

    #[test]
    fn room_type_needs_name_and_sane_rate() {
        let mut form = RoomTypeForm {
            name: "Deluxe".into(),
            description: String::new(),
            rate: 120.0,
            active: true,
        };
        assert!(validate_room_type(&form).is_ok());

        form.rate = -1.0;
        assert!(validate_room_type(&form).is_err());

        form.rate = 0.0;
        form.name = "   ".into();
        assert!(validate_room_type(&form).is_err());
    }
}
