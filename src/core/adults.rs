use crate::core::UserRecord;

pub const DEFAULT_MESSAGE: &str = "No users over 18.";

const SEPARATOR: &str = ", ";

/// Trimmed names of the adult users, in input order.
pub fn adult_names(users: &[UserRecord]) -> Vec<String> {
    users
        .iter()
        .filter(|user| user.is_adult())
        .filter_map(UserRecord::display_name)
        .collect()
}

/// Joins the adult names with `", "`, or returns `default_message`
/// (falling back to [`DEFAULT_MESSAGE`]) when none qualify.
///
/// Never fails: records with a non-numeric age or an empty name are dropped.
pub fn format_adult_names(users: &[UserRecord], default_message: Option<&str>) -> String {
    let names = adult_names(users);

    tracing::debug!(
        "Kept {} of {} user records as adults",
        names.len(),
        users.len()
    );

    if names.is_empty() {
        return default_message.unwrap_or(DEFAULT_MESSAGE).to_string();
    }

    names.join(SEPARATOR)
}
