//! HTTP tests for records, wallet and dashboard routes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::{access_token, app, send};

fn expense(amount: Value, payment_method: &str) -> Value {
    json!({
        "date": "2024-05-01",
        "title": "Groceries",
        "category": "Food",
        "amount": amount,
        "paymentMethod": payment_method,
    })
}

async fn deposit(app: &axum::Router, token: &str, amount: Value) -> common::TestResponse {
    send(
        app,
        Method::PATCH,
        "/wallet/add-balance",
        Some(token),
        Some(json!({ "amount": amount })),
    )
    .await
}

#[tokio::test]
async fn test_wallet_expense_deducts_balance() {
    let app = app().await;
    let token = access_token(&app, "asha").await;

    let funded = deposit(&app, &token, json!(100)).await;
    assert_eq!(funded.status, StatusCode::OK);
    assert_eq!(funded.data()["balance"], "100.00");

    let created = send(
        &app,
        Method::POST,
        "/records/create",
        Some(&token),
        Some(expense(json!(40), "Wallet")),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    assert_eq!(created.data()["record"]["amount"], "40.00");
    assert_eq!(created.data()["record"]["paymentMethod"], "Wallet");

    let wallet = send(&app, Method::GET, "/wallet", Some(&token), None).await;
    assert_eq!(wallet.data()["balance"], "60.00");
    assert_eq!(wallet.data()["walletName"], "Wallet");
}

#[tokio::test]
async fn test_insufficient_funds_leaves_no_record() {
    let app = app().await;
    let token = access_token(&app, "asha").await;
    deposit(&app, &token, json!("100.00")).await;

    let rejected = send(
        &app,
        Method::POST,
        "/records/create",
        Some(&token),
        Some(expense(json!(150), "Wallet")),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["error"], "INSUFFICIENT_FUNDS");

    let wallet = send(&app, Method::GET, "/wallet", Some(&token), None).await;
    assert_eq!(wallet.data()["balance"], "100.00");

    let records = send(&app, Method::GET, "/records", Some(&token), None).await;
    assert_eq!(records.data()["meta"]["total"], 0);
}

#[tokio::test]
async fn test_record_validation() {
    let app = app().await;
    let token = access_token(&app, "asha").await;

    for body in [
        expense(json!(-1), "Cash"),
        expense(Value::Null, "Cash"),
        expense(json!(5), "Barter"),
        json!({ "date": "2024-05-01", "title": "x", "category": "food", "amount": 5, "paymentMethod": "Cash" }),
    ] {
        let response = send(&app, Method::POST, "/records/create", Some(&token), Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", response.body);
        assert_eq!(response.body["error"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_wallet_expense_without_wallet() {
    let app = app().await;
    let token = access_token(&app, "asha").await;

    let deleted = send(&app, Method::POST, "/wallet/delete-wallet", Some(&token), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = send(
        &app,
        Method::POST,
        "/records/create",
        Some(&token),
        Some(expense(json!(5), "Wallet")),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let cash = send(
        &app,
        Method::POST,
        "/records/create",
        Some(&token),
        Some(expense(json!(5), "Cash")),
    )
    .await;
    assert_eq!(cash.status, StatusCode::CREATED);

    let dashboard = send(&app, Method::GET, "/dashboard", Some(&token), None).await;
    assert_eq!(dashboard.data()["userWallet"], Value::Null);
    assert_eq!(dashboard.data()["totalNumberOfRecords"], 1);
}

#[tokio::test]
async fn test_wallet_lifecycle() {
    let app = app().await;
    let token = access_token(&app, "asha").await;

    let duplicate = send(&app, Method::POST, "/wallet/create-wallet", Some(&token), None).await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let renamed = send(
        &app,
        Method::PATCH,
        "/wallet/change-wallet-name",
        Some(&token),
        Some(json!({ "walletName": "Travel" })),
    )
    .await;
    assert_eq!(renamed.data()["walletName"], "Travel");

    send(&app, Method::POST, "/wallet/delete-wallet", Some(&token), None).await;
    let missing = send(&app, Method::GET, "/wallet", Some(&token), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let created = send(
        &app,
        Method::POST,
        "/wallet/create-wallet",
        Some(&token),
        Some(json!({ "walletName": "Savings" })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["walletName"], "Savings");
    assert_eq!(created.data()["balance"], "0.00");
}

#[tokio::test]
async fn test_add_balance_rejects_non_positive() {
    let app = app().await;
    let token = access_token(&app, "asha").await;

    for amount in [json!(0), json!(-10), Value::Null] {
        let response = deposit(&app, &token, amount).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", response.body);
    }
}

#[tokio::test]
async fn test_concurrent_deposits() {
    let app = app().await;
    let token = access_token(&app, "asha").await;

    let (a, b) = tokio::join!(
        deposit(&app, &token, json!(25.50)),
        deposit(&app, &token, json!("25.50")),
    );
    assert_eq!(a.status, StatusCode::OK);
    assert_eq!(b.status, StatusCode::OK);

    let wallet = send(&app, Method::GET, "/wallet", Some(&token), None).await;
    assert_eq!(wallet.data()["balance"], "51.00");
}

#[tokio::test]
async fn test_delete_records() {
    let app = app().await;
    let asha = access_token(&app, "asha").await;
    let ravi = access_token(&app, "ravi").await;

    let created = send(
        &app,
        Method::POST,
        "/records/create",
        Some(&asha),
        Some(expense(json!(12.5), "UPI")),
    )
    .await;
    let record_id = created.data()["record"]["id"].as_str().unwrap().to_string();

    let foreign = send(
        &app,
        Method::DELETE,
        &format!("/records/delete/{record_id}"),
        Some(&ravi),
        None,
    )
    .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let bad_id = send(&app, Method::DELETE, "/records/delete/not-a-uuid", Some(&asha), None).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);

    let own = send(
        &app,
        Method::DELETE,
        &format!("/records/delete/{record_id}"),
        Some(&asha),
        None,
    )
    .await;
    assert_eq!(own.status, StatusCode::OK);

    let gone = send(
        &app,
        Method::DELETE,
        &format!("/records/delete/{record_id}"),
        Some(&asha),
        None,
    )
    .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    for _ in 0..2 {
        send(&app, Method::POST, "/records/create", Some(&asha), Some(expense(json!(1), "Cash"))).await;
    }
    let all = send(&app, Method::DELETE, "/records/delete-all", Some(&asha), None).await;
    assert_eq!(all.data()["deleted"], 2);
}

#[tokio::test]
async fn test_list_pagination_and_dashboard() {
    let app = app().await;
    let token = access_token(&app, "asha").await;
    deposit(&app, &token, json!(100)).await;

    for (date, amount, method) in [
        ("2024-01-15", json!(10), "Wallet"),
        ("2024-03-02", json!(20), "Cash"),
        ("2023-12-31", json!(30.25), "Credit Card"),
    ] {
        let mut body = expense(amount, method);
        body["date"] = json!(date);
        let response = send(&app, Method::POST, "/records/create", Some(&token), Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    }

    let page = send(&app, Method::GET, "/records?page=1&perPage=2", Some(&token), None).await;
    assert_eq!(page.data()["data"].as_array().unwrap().len(), 2);
    assert_eq!(page.data()["meta"]["totalPages"], 2);

    let dashboard = send(&app, Method::GET, "/dashboard", Some(&token), None).await;
    assert_eq!(dashboard.data()["userWallet"]["balance"], "90.00");
    assert_eq!(dashboard.data()["totalNumberOfRecords"], 3);
    assert_eq!(dashboard.data()["totalAmountSpent"], "60.25");
    assert_eq!(
        dashboard.data()["paymentMethodWiseRecords"]
            .as_array()
            .unwrap()
            .len(),
        3
    );

    let annual = send(&app, Method::GET, "/dashboard/annual", Some(&token), None).await;
    let months: Vec<(i64, i64)> = annual.data()["annualRecords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| (m["year"].as_i64().unwrap(), m["month"].as_i64().unwrap()))
        .collect();
    assert_eq!(months, vec![(2023, 12), (2024, 1), (2024, 3)]);
}
