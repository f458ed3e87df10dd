//! Integration tests for the `/shows` pages.

mod common;

use axum::http::StatusCode;
use common::*;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_uses_full_timestamp_format(pool: PgPool) {
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, venue, artist, "2019-05-21T21:30:00Z").await;

    let response = get(build_test_app(pool), "/shows").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], "shows");
    assert_eq!(
        json["data"],
        serde_json::json!([{
            "venue_id": venue,
            "venue_name": "The Musical Hop",
            "artist_id": artist,
            "artist_name": "Guns N Petals",
            "artist_image_link": "https://example.com/artist.jpg",
            "start_time": "2019-05-21 21:30:00",
        }])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_is_ordered_by_start_time(pool: PgPool) {
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, venue, artist, "2035-04-01 20:00:00").await;
    create_show(&pool, venue, artist, "2019-06-15 23:00:00").await;

    let json = body_json(get(build_test_app(pool), "/shows").await).await;
    assert_eq!(json["data"][0]["start_time"], "2019-06-15 23:00:00");
    assert_eq!(json["data"][1]["start_time"], "2035-04-01 20:00:00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_form_prefills_start_time(pool: PgPool) {
    let json = body_json(get(build_test_app(pool), "/shows/create").await).await;
    assert_eq!(json["page"], "new_show");
    assert!(json["data"].get("choices").is_none());

    let prefilled = json["data"]["values"]["start_time"].as_str().unwrap();
    assert!(
        chrono::NaiveDateTime::parse_from_str(prefilled, "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected prefill {prefilled}"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_success_flashes_on_home_page(pool: PgPool) {
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;
    let (venue, artist) = (venue.to_string(), artist.to_string());

    let json = body_json(
        post_form(
            build_test_app(pool.clone()),
            "/shows/create",
            &[
                ("artist_id", artist.as_str()),
                ("venue_id", venue.as_str()),
                ("start_time", "2035-04-01 20:00:00"),
            ],
        )
        .await,
    )
    .await;
    assert_eq!(json["page"], "home");
    assert_eq!(json["flash"]["category"], "success");
    assert_eq!(json["flash"]["message"], "Show was successfully listed!");
    assert_eq!(count(&pool, "shows").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_unknown_artist_writes_nothing(pool: PgPool) {
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let venue = venue.to_string();

    let json = body_json(
        post_form(
            build_test_app(pool.clone()),
            "/shows/create",
            &[
                ("artist_id", "999"),
                ("venue_id", venue.as_str()),
                ("start_time", "2035-04-01 20:00:00"),
            ],
        )
        .await,
    )
    .await;
    assert_eq!(json["flash"]["category"], "error");
    assert_eq!(json["flash"]["message"], "Failed to create show");
    assert_eq!(count(&pool, "shows").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_unparseable_fields_writes_nothing(pool: PgPool) {
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;
    let (venue, artist) = (venue.to_string(), artist.to_string());

    for fields in [
        vec![("artist_id", artist.as_str()), ("venue_id", venue.as_str()), ("start_time", "next tuesday")],
        vec![("artist_id", "abc"), ("venue_id", venue.as_str()), ("start_time", "2035-04-01 20:00:00")],
        vec![("venue_id", venue.as_str()), ("start_time", "2035-04-01 20:00:00")],
    ] {
        let json =
            body_json(post_form(build_test_app(pool.clone()), "/shows/create", &fields).await)
                .await;
        assert_eq!(json["flash"]["message"], "Failed to create show");
    }
    assert_eq!(count(&pool, "shows").await, 0);
}
