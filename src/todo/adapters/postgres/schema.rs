//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo item records.
    todos (todo_id) {
        /// Store-assigned todo identifier.
        todo_id -> Int4,
        /// Owning card.
        card_id -> Int4,
        /// Item text.
        #[max_length = 255]
        item -> Varchar,
        /// Check status (unchecked or checked).
        #[max_length = 20]
        check_status -> Varchar,
    }
}

diesel::table! {
    /// Owning cards; only the key is needed to lock a card while inserting.
    cards (card_id) {
        /// Card identifier.
        card_id -> Int4,
    }
}

diesel::joinable!(todos -> cards (card_id));
diesel::allow_tables_to_appear_in_same_query!(todos, cards);
