use crate::domain::email::username_of;

pub struct CheckAdminUseCase<'a> {
    pub allowed_admins: &'a [String],
}

impl CheckAdminUseCase<'_> {
    /// True when the local part of `email` is on the admin allow-list.
    pub fn execute(&self, email: &str) -> bool {
        let username = username_of(email.trim());
        !username.is_empty() && self.allowed_admins.iter().any(|a| a == username)
    }
}
