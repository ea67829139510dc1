//! Player registration: form validation and club resolution.
//!
//! Mirrors the server-side rules: player accounts only (club and scout
//! registration is announced but not open), required-field enumeration,
//! email shape, password length, photo size cap, and the league-dependent
//! choice between the tier club catalog and the general pool.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::get_club_catalog;
use crate::error::{Result, ScoutError, MAX_PHOTO_BYTES, MIN_PASSWORD_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Player,
    Club,
    Scout,
}

/// League the registrant plays in. The first four are tier leagues with
/// their own club catalogs; street and university football share the
/// general pool and cannot carry a club association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Npfl,
    Nnl1,
    Nnl2,
    Academy,
    Street,
    University,
}

impl League {
    pub fn key(&self) -> &'static str {
        match self {
            League::Npfl => "npfl",
            League::Nnl1 => "nnl1",
            League::Nnl2 => "nnl2",
            League::Academy => "academy",
            League::Street => "street",
            League::University => "university",
        }
    }

    pub fn is_tier(&self) -> bool {
        matches!(self, League::Npfl | League::Nnl1 | League::Nnl2 | League::Academy)
    }

    /// Clubs selectable for this league.
    pub fn clubs(&self) -> Vec<&'static str> {
        let catalog = get_club_catalog();
        let pool = if self.is_tier() {
            catalog.tier(self.key()).unwrap_or(&[])
        } else {
            catalog.general.as_slice()
        };
        pool.iter().map(String::as_str).collect()
    }

    /// Whether the separate club-association question applies. General
    /// leagues force it off.
    pub fn allows_club_association(&self) -> bool {
        self.is_tier()
    }
}

/// Raw registration form input, prior to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub user_type: Option<UserType>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub nationality: String,
    /// Raw uploaded photo bytes, if any. Only the size is validated here.
    pub photo: Option<Vec<u8>>,
    pub position_category: String,
    pub preferred_position: Option<String>,
    pub other_positions: Vec<String>,
    pub dominant_foot: String,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub league: Option<League>,
    /// Club chosen from the league's catalog.
    pub league_club: Option<String>,
    /// Club chosen from the general pool (street/university leagues).
    pub general_club: Option<String>,
    /// "yes"/"no" answer to the club-association question.
    pub club_association: Option<bool>,
    pub associated_club: Option<String>,
}

/// Validated registration record, ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub position_category: String,
    pub preferred_position: Option<String>,
    pub other_positions: Vec<String>,
    pub dominant_foot: String,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub league: League,
    /// Club resolved per league rules.
    pub club: Option<String>,
    pub club_association: bool,
    pub associated_club: Option<String>,
}

/// Minimal email shape check: one '@', and a dot in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    match parts.next() {
        Some(domain) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

impl RegistrationForm {
    /// Required fields that are still empty, in form order.
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut require = |present: bool, name: &'static str| {
            if !present {
                missing.push(name);
            }
        };
        require(!self.first_name.trim().is_empty(), "first_name");
        require(!self.last_name.trim().is_empty(), "last_name");
        require(!self.email.trim().is_empty(), "email");
        require(!self.password.is_empty(), "password");
        require(self.dob.is_some(), "dob");
        require(!self.gender.trim().is_empty(), "gender");
        require(!self.nationality.trim().is_empty(), "nationality");
        require(!self.position_category.trim().is_empty(), "position_category");
        require(!self.dominant_foot.trim().is_empty(), "dominant_foot");
        require(self.height_cm.is_some(), "height_cm");
        require(self.weight_kg.is_some(), "weight_kg");
        require(self.league.is_some(), "league");
        missing
    }

    /// Validate the form and produce a submission-ready record.
    pub fn validate(&self) -> Result<RegistrationRecord> {
        match self.user_type {
            Some(UserType::Player) => {}
            // Club and scout sign-up is not open yet; anything else is an
            // incomplete form.
            Some(UserType::Club) | Some(UserType::Scout) => {
                return Err(ScoutError::RegistrationUnavailable);
            }
            None => {
                return Err(ScoutError::IncompleteRegistration { missing: vec!["user_type"] });
            }
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ScoutError::IncompleteRegistration { missing });
        }

        if !is_valid_email(self.email.trim()) {
            return Err(ScoutError::InvalidEmail(self.email.trim().to_string()));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ScoutError::PasswordTooShort);
        }
        if let Some(photo) = &self.photo {
            if photo.len() > MAX_PHOTO_BYTES {
                return Err(ScoutError::PhotoTooLarge { size: photo.len() });
            }
        }

        let league = self
            .league
            .ok_or(ScoutError::IncompleteRegistration { missing: vec!["league"] })?;
        let dob = self.dob.ok_or(ScoutError::IncompleteRegistration { missing: vec!["dob"] })?;
        let height_cm = self
            .height_cm
            .ok_or(ScoutError::IncompleteRegistration { missing: vec!["height_cm"] })?;
        let weight_kg = self
            .weight_kg
            .ok_or(ScoutError::IncompleteRegistration { missing: vec!["weight_kg"] })?;

        // Tier leagues take the club from their own catalog; general
        // leagues from the shared pool, with association forced off.
        let club = if league.is_tier() {
            self.league_club.clone()
        } else {
            self.general_club.clone()
        };
        let club_association =
            league.allows_club_association() && self.club_association.unwrap_or(false);
        let associated_club =
            if club_association { self.associated_club.clone() } else { None };

        log::info!("registration validated for {}", self.email.trim());

        Ok(RegistrationRecord {
            first_name: self.first_name.trim().to_string(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            dob,
            gender: self.gender.clone(),
            nationality: self.nationality.clone(),
            position_category: self.position_category.clone(),
            preferred_position: self.preferred_position.clone(),
            other_positions: self.other_positions.clone(),
            dominant_foot: self.dominant_foot.clone(),
            height_cm,
            weight_kg,
            league,
            club,
            club_association,
            associated_club,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            user_type: Some(UserType::Player),
            first_name: "Ade".to_string(),
            middle_name: None,
            last_name: "Okafor".to_string(),
            email: "ade.okafor@example.com".to_string(),
            password: "s3cret!".to_string(),
            dob: NaiveDate::from_ymd_opt(2004, 6, 1),
            gender: "male".to_string(),
            nationality: "Nigeria".to_string(),
            photo: None,
            position_category: "attacker".to_string(),
            preferred_position: Some("ST".to_string()),
            other_positions: vec!["CF".to_string()],
            dominant_foot: "right".to_string(),
            height_cm: Some(181),
            weight_kg: Some(74),
            league: Some(League::Npfl),
            league_club: Some("Rivers United".to_string()),
            general_club: None,
            club_association: Some(true),
            associated_club: Some("Enyimba FC".to_string()),
        }
    }

    #[test]
    fn complete_player_form_validates() {
        let record = complete_form().validate().unwrap();
        assert_eq!(record.club.as_deref(), Some("Rivers United"));
        assert!(record.club_association);
        assert_eq!(record.associated_club.as_deref(), Some("Enyimba FC"));
    }

    #[test]
    fn club_and_scout_signup_not_open() {
        let mut form = complete_form();
        form.user_type = Some(UserType::Club);
        assert!(matches!(form.validate(), Err(ScoutError::RegistrationUnavailable)));
        form.user_type = Some(UserType::Scout);
        assert!(matches!(form.validate(), Err(ScoutError::RegistrationUnavailable)));
    }

    #[test]
    fn missing_fields_are_enumerated() {
        let mut form = complete_form();
        form.first_name.clear();
        form.height_cm = None;
        form.league = None;
        match form.validate() {
            Err(ScoutError::IncompleteRegistration { missing }) => {
                assert_eq!(missing, vec!["first_name", "height_cm", "league"]);
            }
            other => panic!("expected IncompleteRegistration, got {other:?}"),
        }
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("two@@ats.com"));

        let mut form = complete_form();
        form.email = "not-an-email".to_string();
        assert!(matches!(form.validate(), Err(ScoutError::InvalidEmail(_))));
    }

    #[test]
    fn short_passwords_rejected() {
        let mut form = complete_form();
        form.password = "12345".to_string();
        assert!(matches!(form.validate(), Err(ScoutError::PasswordTooShort)));
    }

    #[test]
    fn oversized_photo_rejected() {
        let mut form = complete_form();
        form.photo = Some(vec![0u8; MAX_PHOTO_BYTES + 1]);
        assert!(matches!(
            form.validate(),
            Err(ScoutError::PhotoTooLarge { size }) if size == MAX_PHOTO_BYTES + 1
        ));
        form.photo = Some(vec![0u8; MAX_PHOTO_BYTES]);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn general_league_uses_pool_and_blocks_association() {
        let mut form = complete_form();
        form.league = Some(League::University);
        form.league_club = None;
        form.general_club = Some("University of Lagos FC".to_string());
        // The form may still carry a stale association answer; it must not
        // survive validation for a general league.
        form.club_association = Some(true);

        let record = form.validate().unwrap();
        assert_eq!(record.club.as_deref(), Some("University of Lagos FC"));
        assert!(!record.club_association);
        assert_eq!(record.associated_club, None);
    }

    #[test]
    fn league_club_catalogs() {
        assert_eq!(League::Npfl.clubs().len(), 20);
        assert_eq!(League::Academy.clubs().len(), 12);
        assert_eq!(League::Street.clubs().len(), 26);
        assert!(League::Street.clubs().contains(&"Lagos City FC"));
        assert!(!League::Street.allows_club_association());
        assert!(League::Nnl2.allows_club_association());
    }

    #[test]
    fn league_keys_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&League::Npfl).unwrap(), "\"npfl\"");
        let league: League = serde_json::from_str("\"university\"").unwrap();
        assert_eq!(league, League::University);
    }
}
