use axum::http::{StatusCode, header};
use recipebook_recipe::Category;

mod helpers;

#[tokio::test]
async fn test_anonymous_redirected_to_login() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let response = app.get("/favorites", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let response = app.post("/favorites/anything/add", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.get("/favorites", Some("not-a-token")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
async fn test_token_of_deleted_user_rejected() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let john = app.create_user("john").await?;
    let token = app.token(&john);

    recipebook_user::Command(app.state.clone())
        .delete(&john)
        .await?;

    let response = app.get("/favorites", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
async fn test_add_remove_flow() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let john = app.create_user("john").await?;
    let token = app.token(&john);
    let pasta = app
        .create_recipe("Pasta", Category::Dinner, 5, 15, &["pasta"])
        .await?;

    let response = app
        .post(&format!("/favorites/{pasta}/add"), Some(&token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::json(response).await;
    assert_eq!(body["changed"], true);
    assert_eq!(body["message"], "Recipe added to your favorites");

    let response = app
        .post(&format!("/favorites/{pasta}/add"), Some(&token))
        .await;
    let body = helpers::json(response).await;
    assert_eq!(body["changed"], false);
    assert_eq!(body["message"], "Recipe is already in your favorites");

    let response = app.get(&format!("/recipes/{pasta}"), Some(&token)).await;
    assert_eq!(helpers::json(response).await["is_favorite"], true);

    let response = app.get("/favorites", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["recipes"][0]["name"], "Pasta");

    let response = app
        .post(&format!("/favorites/{pasta}/remove"), Some(&token))
        .await;
    let body = helpers::json(response).await;
    assert_eq!(body["changed"], true);
    assert_eq!(body["message"], "Recipe removed from your favorites");

    let response = app
        .post(&format!("/favorites/{pasta}/remove"), Some(&token))
        .await;
    let body = helpers::json(response).await;
    assert_eq!(body["changed"], false);
    assert_eq!(body["message"], "Recipe was not in your favorites");

    Ok(())
}

#[tokio::test]
async fn test_add_unknown_recipe() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let john = app.create_user("john").await?;
    let token = app.token(&john);

    let response = app.post("/favorites/unknown/add", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_stats() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let john = app.create_user("john").await?;
    let token = app.token(&john);

    let response = app.get("/favorites/stats", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(helpers::json(response).await.is_null());

    let toast = app
        .create_recipe("Toast", Category::Breakfast, 5, 10, &["bread", "butter"])
        .await?;
    app.post(&format!("/favorites/{toast}/add"), Some(&token))
        .await;

    let response = app.get("/favorites/stats", Some(&token)).await;
    let body = helpers::json(response).await;
    assert_eq!(body["cooking_time"][0]["label"], "0-15 min");
    assert_eq!(body["cooking_time"][0]["count"], 1);
    assert_eq!(body["categories"][0]["label"], "Breakfast");
    assert_eq!(body["top_ingredients"].as_array().unwrap().len(), 2);

    Ok(())
}
