mod helpers;

use chrono::NaiveDate;
use fincv_sdk::{
    APIErrorVariant, CreateDocumentInput, GetDocumentsInput, UpdateDocumentInput, ID,
};
use helpers::setup::spawn_app;

fn document_input(user_id: ID, title: &str, classification_id: u8) -> CreateDocumentInput {
    CreateDocumentInput {
        user_id,
        title: title.into(),
        amount: 12345,
        partner: "한국전력".into(),
        bank: "국민".into(),
        account_number: "100-1".into(),
        partner_number: "200-2".into(),
        due: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        classification_id,
        content: None,
        path: None,
    }
}

#[actix_web::test]
async fn test_crud_document() {
    let (_, sdk) = spawn_app().await;
    let user_id = ID::new();

    let document = sdk
        .document
        .create(document_input(user_id, "전기료", 4))
        .await
        .expect("Expected to create document")
        .document;
    assert_eq!(document.user_id, user_id);
    assert_eq!(document.classification_id, 4);
    assert!(document.content.is_none());

    let updated = sdk
        .document
        .update(UpdateDocumentInput {
            document_id: document.id,
            amount: Some(20000),
            path: Some("/scans/1.png".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to update document")
        .document;
    assert_eq!(updated.amount, 20000);
    assert_eq!(updated.path.as_deref(), Some("/scans/1.png"));
    assert_eq!(updated.title, "전기료");

    let by_user = sdk.document.get_by_user(user_id).await.unwrap().documents;
    assert_eq!(by_user.len(), 1);

    sdk.document.delete(document.id).await.unwrap();
    let err = sdk.document.get(document.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::test]
async fn test_rejects_unknown_classification() {
    let (_, sdk) = spawn_app().await;

    let err = sdk
        .document
        .create(document_input(ID::new(), "전기료", 5))
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);
}

#[actix_web::test]
async fn test_filter_documents() {
    let (_, sdk) = spawn_app().await;
    let user_id = ID::new();

    for (title, classification_id) in [("전기료", 4), ("월급", 1), ("가스비", 4)] {
        sdk.document
            .create(document_input(user_id, title, classification_id))
            .await
            .unwrap();
    }
    sdk.document
        .create(document_input(ID::new(), "수도료", 4))
        .await
        .unwrap();

    let all = sdk
        .document
        .get_all(GetDocumentsInput::default())
        .await
        .unwrap()
        .documents;
    assert_eq!(all.len(), 4);

    let users = sdk
        .document
        .get_all(GetDocumentsInput {
            user_id: Some(user_id),
            classification_id: None,
        })
        .await
        .unwrap()
        .documents;
    assert_eq!(users.len(), 3);

    let bills = sdk
        .document
        .get_all(GetDocumentsInput {
            user_id: Some(user_id),
            classification_id: Some(4),
        })
        .await
        .unwrap()
        .documents;
    assert_eq!(bills.len(), 2);
    assert!(bills.iter().all(|d| d.classification_id == 4));

    // Ignored without a user
    let unfiltered = sdk
        .document
        .get_all(GetDocumentsInput {
            user_id: None,
            classification_id: Some(1),
        })
        .await
        .unwrap()
        .documents;
    assert_eq!(unfiltered.len(), 4);
}

#[actix_web::test]
async fn test_document_content() {
    let (_, sdk) = spawn_app().await;
    let document = sdk
        .document
        .create(document_input(ID::new(), "전기료", 4))
        .await
        .unwrap()
        .document;

    let content = sdk.document.get_content(document.id).await.unwrap();
    assert_eq!(content.document_id, document.id);
    assert!(content.content.is_none());

    let err = sdk
        .document
        .set_content(document.id, "   ".into())
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    sdk.document
        .set_content(document.id, "제목 : 전기료".into())
        .await
        .expect("Expected to set content");
    let content = sdk.document.get_content(document.id).await.unwrap();
    assert_eq!(content.content.as_deref(), Some("제목 : 전기료"));

    let cleared = sdk.document.clear_content(document.id).await.unwrap().document;
    assert!(cleared.content.is_none());
    assert_eq!(cleared.title, "전기료");

    let err = sdk.document.get_content(ID::new()).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}
