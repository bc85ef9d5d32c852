//! Validation predicates applied during registration.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use mockable::Clock;

use crate::domain::user::User;

/// Youngest age (in whole years) accepted for registration.
pub const MINIMUM_AGE: i32 = 21;

/// Smallest credit limit accepted for users subject to the credit check.
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;

/// Pure pass/fail checks over registration fields.
///
/// The clock is only read by [`has_valid_age`](Self::has_valid_age); the
/// other predicates touch nothing outside their arguments.
pub struct UserValidator {
    clock: Arc<dyn Clock>,
}

impl UserValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Both name parts must be non-empty.
    pub fn has_valid_full_name(&self, firstname: &str, surname: &str) -> bool {
        !firstname.is_empty() && !surname.is_empty()
    }

    /// Deliberately lax: rejects only addresses that contain `@` without
    /// any `.`. Strings with no `@` at all pass. Callers rely on this exact
    /// behaviour; tightening it here would change which registrations are
    /// accepted.
    pub fn has_valid_email(&self, email: &str) -> bool {
        !(email.contains('@') && !email.contains('.'))
    }

    /// Whole-year age as of the clock's current date must reach
    /// [`MINIMUM_AGE`]. The year difference is decremented by one when
    /// today's month and day precede the birthday's.
    pub fn has_valid_age(&self, date_of_birth: NaiveDate) -> bool {
        let today = self.clock.utc().date_naive();
        let mut age = today.year() - date_of_birth.year();
        if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
            age -= 1;
        }
        age >= MINIMUM_AGE
    }

    /// Users subject to the credit check must carry at least
    /// [`MINIMUM_CREDIT_LIMIT`]; waived users always pass.
    pub fn has_valid_credit(&self, user: &User) -> bool {
        !(user.has_credit_limit() && user.credit_limit() < MINIMUM_CREDIT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::client::{Client, ClientStatus};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    /// Validator pinned to 2020-02-02.
    fn validator() -> UserValidator {
        let utc_now = Utc
            .with_ymd_and_hms(2020, 2, 2, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        UserValidator::new(Arc::new(FixtureClock { utc_now }))
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[rstest]
    #[case("Bikram", "Swain", true)]
    #[case("", "Swain", false)]
    #[case("Bikram", "", false)]
    #[case("", "", false)]
    fn full_name_requires_both_parts(
        #[case] firstname: &str,
        #[case] surname: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(
            validator().has_valid_full_name(firstname, surname),
            expected
        );
    }

    #[rstest]
    #[case("test@gmail.com", true)]
    #[case("test@gmailcom", false)]
    fn email_rejects_at_sign_without_dot(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(validator().has_valid_email(email), expected);
    }

    // Pins the lax rule: an address with no '@' at all is not rejected.
    #[rstest]
    #[case("not-an-email")]
    #[case("")]
    #[case("dots.but.no.at")]
    fn accepts_string_without_at_sign(#[case] email: &str) {
        assert!(validator().has_valid_email(email));
    }

    #[rstest]
    // Turned 30 two days before the fixture date.
    #[case(1990, 1, 31, true)]
    // 21st birthday falls exactly on the fixture date.
    #[case(1999, 2, 2, true)]
    // Year difference says 21 but the birthday is tomorrow.
    #[case(1999, 2, 3, false)]
    // Birthday month has not arrived yet this year.
    #[case(1999, 3, 2, false)]
    #[case(2000, 1, 1, false)]
    fn age_must_reach_twenty_one(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(
            validator().has_valid_age(date(year, month, day)),
            expected
        );
    }

    fn user_with_credit(has_credit_limit: bool, credit_limit: i64) -> User {
        let client = Client {
            id: 1,
            name: "Bikram Swain".to_owned(),
            status: ClientStatus::None,
        };
        let mut user = User::new(
            "Bikram",
            "Swain",
            "test@gmail.com",
            date(1990, 2, 2),
            client,
        );
        if has_credit_limit {
            user.require_credit_limit(credit_limit);
        }
        user
    }

    #[rstest]
    #[case(true, 499, false)]
    #[case(true, 500, true)]
    #[case(true, 1000, true)]
    // Waived users pass regardless of the stored default.
    #[case(false, 0, true)]
    fn credit_floor_applies_only_when_checked(
        #[case] has_credit_limit: bool,
        #[case] credit_limit: i64,
        #[case] expected: bool,
    ) {
        let user = user_with_credit(has_credit_limit, credit_limit);
        assert_eq!(validator().has_valid_credit(&user), expected);
    }
}
