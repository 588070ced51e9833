//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When a
//! migration changes the schema, regenerate them with `diesel print-schema`
//! or update them by hand.

diesel::table! {
    /// Cached weather snapshots, one row per normalised city.
    weather_records (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Normalised city name (unique).
        city -> Varchar,
        temperature -> Float8,
        description -> Text,
        feels_like -> Float8,
        humidity -> Float8,
        pressure -> Float8,
        wind_speed -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
