//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Users. Rows are never deleted; soft deletion clears `active`.
    users (id) {
        id -> Int4,
        name -> Varchar,
        /// Unique via `users_email_key`.
        email -> Varchar,
        active -> Bool,
        created_at -> Timestamptz,
        /// Maintained by the `users_set_updated_at` trigger.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Messages, each owned by one user through `messages_user_id_fkey`.
    messages (id) {
        id -> Int4,
        content -> Text,
        user_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(messages -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(users, messages);
