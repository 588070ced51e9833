//! Integration tests for `DieselWeatherStore` against a live PostgreSQL.
//!
//! Set `WEATHER_TEST_DATABASE_URL` to a disposable database to run these
//! tests; they are skipped when it is unset. Each test works on its own
//! city key so suites may share a database.

use diesel_async::RunQueryDsl;
use tokio::sync::OnceCell;
use uuid::Uuid;
use weather_backend::domain::ports::{CreateOutcome, WeatherStore};
use weather_backend::domain::{CityName, WeatherObservation};
use weather_backend::outbound::persistence::{
    DbPool, DieselWeatherStore, PoolConfig, run_migrations,
};

const DATABASE_URL_ENV: &str = "WEATHER_TEST_DATABASE_URL";

static MIGRATED: OnceCell<()> = OnceCell::const_new();

async fn store() -> Option<(DieselWeatherStore, DbPool)> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        eprintln!("SKIP: {DATABASE_URL_ENV} is not set");
        return None;
    };
    MIGRATED
        .get_or_init(|| async {
            run_migrations(&url).await.expect("migrations apply");
        })
        .await;
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(4))
        .await
        .expect("pool builds");
    Some((DieselWeatherStore::new(pool.clone()), pool))
}

fn unique_city() -> CityName {
    CityName::new(&format!("test city {}", Uuid::new_v4())).expect("valid city")
}

fn observation(city: CityName, temperature: f64) -> WeatherObservation {
    WeatherObservation {
        city,
        temperature,
        description: "overcast clouds".to_owned(),
        feels_like: temperature - 2.0,
        humidity: 88.0,
        pressure: 1001.0,
        wind_speed: 6.3,
    }
}

async fn delete_city(pool: &DbPool, city: &CityName) {
    let mut conn = pool.get().await.expect("connection");
    diesel::sql_query("DELETE FROM weather_records WHERE city = $1")
        .bind::<diesel::sql_types::Text, _>(city.as_str())
        .execute(&mut conn)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn created_record_round_trips_through_postgres() {
    let Some((store, pool)) = store().await else {
        return;
    };
    let city = unique_city();

    let outcome = store
        .create(&observation(city.clone(), 4.5))
        .await
        .expect("create");
    let CreateOutcome::Created(created) = outcome else {
        panic!("expected a created record");
    };
    assert_eq!(created.created_at, created.updated_at);

    let found = store.find_by_city(&city).await.expect("find");
    assert_eq!(found, Some(created));

    delete_city(&pool, &city).await;
}

#[tokio::test]
async fn duplicate_insert_reports_already_exists() {
    let Some((store, pool)) = store().await else {
        return;
    };
    let city = unique_city();

    store
        .create(&observation(city.clone(), 4.5))
        .await
        .expect("first create");
    let outcome = store
        .create(&observation(city.clone(), 30.0))
        .await
        .expect("second create");

    assert_eq!(outcome, CreateOutcome::AlreadyExists);
    let stored = store
        .find_by_city(&city)
        .await
        .expect("find")
        .expect("record present");
    assert_eq!(stored.temperature, 4.5);

    delete_city(&pool, &city).await;
}

#[tokio::test]
async fn unknown_city_is_absent() {
    let Some((store, _pool)) = store().await else {
        return;
    };

    let found = store.find_by_city(&unique_city()).await.expect("find");
    assert!(found.is_none());
}
