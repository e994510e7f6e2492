//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a migration
//! changes the schema, regenerate them with `diesel print-schema` or update
//! them by hand.

diesel::table! {
    /// Users referenced by enrollments; profile data lives elsewhere.
    users (user_id) {
        user_id -> Int4,
    }
}

diesel::table! {
    /// Courses users can enroll in.
    courses (course_id) {
        course_id -> Int4,
        /// Shown to clients as the course name.
        description -> Text,
    }
}

diesel::table! {
    /// One row per (user, course) admission. `(user_id, course_id)` is unique.
    enrollments (enrollment_id) {
        enrollment_id -> Int4,
        user_id -> Int4,
        course_id -> Int4,
        /// Canonical status string, e.g. `ACTIVE`.
        status -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(enrollments -> users (user_id));
diesel::joinable!(enrollments -> courses (course_id));

diesel::allow_tables_to_appear_in_same_query!(users, courses, enrollments);
