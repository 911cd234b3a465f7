//! Diesel schema for user account persistence.

diesel::table! {
    /// User account records.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Unique lower-cased login email.
        #[max_length = 255]
        email -> Varchar,
        /// Display name.
        #[max_length = 30]
        nickname -> Varchar,
        /// Argon2 hash in PHC string format.
        password_hash -> Text,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
