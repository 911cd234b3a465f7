//! Diesel schema for card persistence.

diesel::table! {
    /// Planning card records.
    cards (card_id) {
        /// Store-assigned card identifier.
        card_id -> Int4,
        /// Card title.
        #[max_length = 100]
        title -> Varchar,
        /// Lifecycle status (backlog, in_progress, done).
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
