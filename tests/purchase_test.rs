use ticket_service::clients::{PaymentError, ReservationError};
use ticket_service::config::{PurchaseLimits, TicketPrices};
use ticket_service::mock::{CollaboratorCall, MockCollaborators};
use ticket_service::model::{PurchaseAttempt, TicketCategory, TicketRequest};
use ticket_service::purchase::PurchaseError;

fn limits() -> PurchaseLimits {
    PurchaseLimits::default()
}

/// Runs a purchase that is expected to succeed with the given charge and seats.
async fn assert_books(account_id: i64, requests: &[TicketRequest], amount: u64, seats: u64) {
    let mock = MockCollaborators::new();
    mock.expect_payment(account_id, amount).return_ok();
    mock.expect_reservation(account_id, seats).return_ok();

    let summary = mock
        .service(limits())
        .purchase_tickets(Some(account_id), requests)
        .await
        .unwrap_or_else(|e| panic!("purchase failed: {e}"));

    assert_eq!(summary.account_id.get(), account_id);
    assert_eq!(summary.total_price, amount);
    assert_eq!(summary.total_seats, seats);
    mock.verify();
}

/// Runs a purchase that must fail before touching payment or reservation.
async fn assert_rejected(account_id: Option<i64>, requests: &[TicketRequest]) -> PurchaseError {
    let mock = MockCollaborators::new();
    let err = mock
        .service(limits())
        .purchase_tickets(account_id, requests)
        .await
        .unwrap_err();
    assert!(err.is_validation(), "unexpected error kind: {err:?}");
    assert!(mock.calls().is_empty(), "collaborators called: {:?}", mock.calls());
    mock.verify();
    err
}

// ---------------------------------------------------------------------------
// Successful purchases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_single_adult_pays_and_reserves_one_seat() {
    assert_books(100, &[TicketRequest::adult(1)], 25, 1).await;
}

#[tokio::test]
async fn test_twenty_adults() {
    assert_books(101, &[TicketRequest::adult(20)], 500, 20).await;
}

#[tokio::test]
async fn test_multiple_adult_requests_are_summed() {
    assert_books(102, &[TicketRequest::adult(2), TicketRequest::adult(2)], 100, 4).await;
}

#[tokio::test]
async fn test_adult_and_child() {
    assert_books(103, &[TicketRequest::adult(1), TicketRequest::child(1)], 40, 2).await;
}

#[tokio::test]
async fn test_adult_and_infant_infant_is_free_and_seatless() {
    assert_books(104, &[TicketRequest::adult(1), TicketRequest::infant(1)], 25, 1).await;
}

#[tokio::test]
async fn test_mixed_party() {
    assert_books(
        111,
        &[
            TicketRequest::adult(5),
            TicketRequest::child(10),
            TicketRequest::infant(5),
        ],
        275,
        15,
    )
    .await;
}

#[tokio::test]
async fn test_mixed_party_split_over_requests() {
    assert_books(
        112,
        &[
            TicketRequest::adult(2),
            TicketRequest::adult(2),
            TicketRequest::child(2),
            TicketRequest::child(2),
            TicketRequest::infant(2),
            TicketRequest::infant(2),
        ],
        160,
        8,
    )
    .await;
}

#[tokio::test]
async fn test_exactly_twenty_five_tickets() {
    assert_books(
        113,
        &[
            TicketRequest::adult(10),
            TicketRequest::child(10),
            TicketRequest::infant(5),
        ],
        400,
        20,
    )
    .await;
}

#[tokio::test]
async fn test_single_request_of_twenty_five() {
    assert_books(114, &[TicketRequest::adult(25)], 625, 25).await;
}

#[tokio::test]
async fn test_payment_happens_before_reservation_and_after_pricing() {
    let mock = MockCollaborators::new();
    mock.expect_payment(5, 40).return_ok();
    mock.expect_reservation(5, 2).return_ok();

    mock.service(limits())
        .purchase_tickets(Some(5), &[TicketRequest::adult(1), TicketRequest::child(1)])
        .await
        .unwrap();

    let calls = mock.calls();
    let payment_at = calls
        .iter()
        .position(|c| matches!(c, CollaboratorCall::Payment { .. }))
        .unwrap();
    assert!(calls[..payment_at]
        .iter()
        .all(|c| matches!(c, CollaboratorCall::PriceLookup { .. })));
    assert_eq!(
        &calls[payment_at..],
        &[
            CollaboratorCall::Payment {
                account_id: 5,
                amount: 40
            },
            CollaboratorCall::Reservation {
                account_id: 5,
                seats: 2
            },
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_configured_prices_and_limits() {
    let mock = MockCollaborators::with_prices(TicketPrices {
        adult: 20,
        child: 10,
        infant: 3,
    });
    mock.expect_payment(9, 20 * 2 + 10 * 3 + 3).return_ok();
    mock.expect_reservation(9, 5).return_ok();

    let limits = PurchaseLimits {
        max_per_transaction: 6,
        min_per_transaction: 1,
        min_adults: 2,
    };
    let attempt = PurchaseAttempt::new(
        9,
        vec![
            TicketRequest::adult(2),
            TicketRequest::child(3),
            TicketRequest::infant(1),
        ],
    );
    let summary = mock.service(limits).purchase(&attempt).await.unwrap();
    assert_eq!(summary.totals.get(TicketCategory::Infant), 1);
    mock.verify();
}

// ---------------------------------------------------------------------------
// Rejected purchases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_absent_account_id() {
    let err = assert_rejected(None, &[TicketRequest::adult(1)]).await;
    assert_eq!(err, PurchaseError::InvalidAccount(None));
    assert!(err.to_string().contains("Account id null is invalid"));
}

#[tokio::test]
async fn test_non_positive_account_ids() {
    for id in [0, -1, i64::MIN] {
        let err = assert_rejected(Some(id), &[TicketRequest::adult(1)]).await;
        assert_eq!(err, PurchaseError::InvalidAccount(Some(id)));
        assert!(err.to_string().contains(&format!("Account id {id} is invalid")));
    }
}

#[tokio::test]
async fn test_account_checked_before_requests() {
    let err = assert_rejected(Some(0), &[TicketRequest::new(None, 1)]).await;
    assert!(matches!(err, PurchaseError::InvalidAccount(Some(0))));
}

#[tokio::test]
async fn test_missing_category_prevents_payment_and_reservation() {
    let err = assert_rejected(
        Some(113),
        &[TicketRequest::new(None, 1), TicketRequest::adult(1)],
    )
    .await;
    assert_eq!(err, PurchaseError::MalformedRequest { index: 0 });
}

#[tokio::test]
async fn test_category_checked_before_quantities() {
    let err = assert_rejected(
        Some(1),
        &[TicketRequest::adult(0), TicketRequest::new(None, 1)],
    )
    .await;
    assert_eq!(err, PurchaseError::MalformedRequest { index: 1 });
}

#[tokio::test]
async fn test_over_limit_single_request_prevents_payment_and_reservation() {
    let err = assert_rejected(Some(114), &[TicketRequest::adult(26)]).await;
    assert!(matches!(err, PurchaseError::InvalidQuantity { quantity: 26, .. }));
}

#[tokio::test]
async fn test_zero_and_negative_quantities() {
    for quantity in [0, -1] {
        let err = assert_rejected(Some(1), &[TicketRequest::adult(quantity)]).await;
        assert_eq!(
            err.to_string(),
            format!("Number of tickets requested is {quantity}, but needs to be between 1 and 25")
        );
    }
}

#[tokio::test]
async fn test_no_adult() {
    let err = assert_rejected(
        Some(1),
        &[TicketRequest::child(2), TicketRequest::infant(2)],
    )
    .await;
    assert_eq!(
        err,
        PurchaseError::MissingAdult {
            adults: 0,
            required: 1
        }
    );
}

#[tokio::test]
async fn test_twenty_six_tickets() {
    let err = assert_rejected(
        Some(1),
        &[
            TicketRequest::adult(10),
            TicketRequest::child(10),
            TicketRequest::infant(6),
        ],
    )
    .await;
    assert_eq!(
        err.to_string(),
        "Total number of tickets requested is 26, but needs to be between 1 and 25"
    );
}

#[tokio::test]
async fn test_overflowing_requests_are_rejected() {
    let err = assert_rejected(
        Some(1),
        &[TicketRequest::adult(i32::MAX), TicketRequest::adult(i32::MAX)],
    )
    .await;
    assert!(err.to_string().contains("2147483647"));
}

#[tokio::test]
async fn test_empty_request_list() {
    let err = assert_rejected(Some(1), &[]).await;
    assert!(matches!(err, PurchaseError::MissingAdult { adults: 0, .. }));
}

// ---------------------------------------------------------------------------
// Collaborator failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_payment_failure_skips_reservation() {
    let mock = MockCollaborators::new();
    let declined = PaymentError::Declined("insufficient funds".into());
    mock.expect_payment(7, 50).return_err(declined.clone());

    let err = mock
        .service(limits())
        .purchase_tickets(Some(7), &[TicketRequest::adult(2)])
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::PaymentFailed(declined));
    assert_eq!(
        mock.side_effects(),
        vec![CollaboratorCall::Payment {
            account_id: 7,
            amount: 50
        }]
    );
    mock.verify();
}

#[tokio::test]
async fn test_reservation_failure_surfaces_after_single_payment() {
    let mock = MockCollaborators::new();
    mock.expect_payment(8, 25).return_ok();
    mock.expect_reservation(8, 1)
        .return_err(ReservationError::SoldOut { requested: 1 });

    let err = mock
        .service(limits())
        .purchase_tickets(Some(8), &[TicketRequest::adult(1)])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PurchaseError::ReservationFailed(ReservationError::SoldOut { requested: 1 })
    ));
    assert_eq!(mock.side_effects().len(), 2);
    mock.verify();
}
