//! ServiceApi behavior against a mock backend.

use httpmock::prelude::*;
use mimuni::{PhotoAttachment, ServiceApi, ServiceForm, ServiceKind};
use serde_json::json;
use std::io::Write;

#[tokio::test]
async fn fetches_professional_listings_scoped_by_mail() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/inicio/misServiciosProfesionales")
                .query_param("mail", "citizen@example.com");
            then.status(200).json_body(json!([
                {
                    "idservicioprofesional": 1,
                    "nombre": "Juan",
                    "apellido": "Perez",
                    "contacto": "11-4444-5555",
                    "horario": "9 a 18",
                    "rubro": "Electrician",
                    "descripcion": "Home installs",
                    "estado": "HABILITADO"
                },
                {
                    "idservicioprofesional": 2,
                    "nombre": "Maria",
                    "apellido": "Gomez",
                    "contacto": "11-6666-7777",
                    "horario": "10 a 14",
                    "rubro": "Plumbing",
                    "descripcion": "Repairs",
                    "estado": "PENDIENTE"
                }
            ]));
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    let listings = api
        .my_professional_services("citizen@example.com")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, 1);
    assert_eq!(listings[0].first_name, "Juan");
    assert_eq!(listings[1].category, "Plumbing");
}

#[tokio::test]
async fn fetches_commerce_listings_scoped_by_mail() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/inicio/misServiciosComercio")
                .query_param("mail", "citizen@example.com");
            then.status(200).json_body(json!([
                {
                    "idServicioComercio": 9,
                    "direccion": "Av. Mitre 1200",
                    "contacto": "info@shop.test",
                    "descripcion": "Bakery",
                    "estado": "HABILITADO"
                }
            ]));
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    let listings = api.my_commerce_services("citizen@example.com").await.unwrap();

    mock.assert_async().await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, 9);
    assert_eq!(listings[0].address, "Av. Mitre 1200");
}

#[tokio::test]
async fn fetch_surfaces_backend_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/inicio/misServiciosProfesionales");
            then.status(500).body("database unavailable");
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    let result = api.my_professional_services("citizen@example.com").await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn delete_hits_the_kind_specific_endpoint_with_both_params() {
    let server = MockServer::start_async().await;
    let professional = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/inicio/eliminarServicioProfesional")
                .query_param("mail", "citizen@example.com")
                .query_param("idServicio", "7");
            then.status(200);
        })
        .await;
    let commerce = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/inicio/eliminarServicioComercio")
                .query_param("mail", "citizen@example.com")
                .query_param("idServicio", "3");
            then.status(200);
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    api.delete_service(ServiceKind::Professional, "citizen@example.com", 7)
        .await
        .unwrap();
    api.delete_service(ServiceKind::Commerce, "citizen@example.com", 3)
        .await
        .unwrap();

    professional.assert_async().await;
    commerce.assert_async().await;
}

#[tokio::test]
async fn delete_propagates_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/inicio/eliminarServicioComercio");
            then.status(404).body("no such listing");
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    let result = api
        .delete_service(ServiceKind::Commerce, "citizen@example.com", 99)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn create_commerce_posts_multipart_with_numbered_photo_parts() {
    let server = MockServer::start_async().await;
    let commerce = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/inicio/crearServicioComercio")
                .body_contains("citizen@example.com")
                .body_contains("Av. Mitre 1200")
                .body_contains("Fresh bread daily")
                .body_contains("foto_0.jpg")
                .body_contains("foto_1.jpg")
                .body_contains("image/jpeg");
            then.status(200);
        })
        .await;
    let professional = server
        .mock_async(|when, then| {
            when.method(POST).path("/inicio/crearServicioProfesional");
            then.status(200);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut photos = Vec::new();
    for name in ["front.jpg", "inside.jpg"] {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"jpeg bytes").unwrap();
        photos.push(PhotoAttachment::new(path));
    }

    let api = ServiceApi::new(server.base_url());
    let form = ServiceForm::Commerce {
        address: "Av. Mitre 1200".to_string(),
        contact: "info@bakery.test".to_string(),
    };
    api.create_service("citizen@example.com", "Fresh bread daily", &form, &photos)
        .await
        .unwrap();

    commerce.assert_async().await;
    professional.assert_hits_async(0).await;
}

#[tokio::test]
async fn create_professional_posts_category_and_schedule() {
    let server = MockServer::start_async().await;
    let professional = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/inicio/crearServicioProfesional")
                .body_contains("medioContacto")
                .body_contains("horario")
                .body_contains("rubro")
                .body_contains("Electrician");
            then.status(200);
        })
        .await;
    let commerce = server
        .mock_async(|when, then| {
            when.method(POST).path("/inicio/crearServicioComercio");
            then.status(200);
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    let form = ServiceForm::Professional {
        contact: "11-4444-5555".to_string(),
        schedule: "Mon-Fri 9 to 18".to_string(),
        category: "Electrician".to_string(),
    };
    api.create_service("citizen@example.com", "Home installs", &form, &[])
        .await
        .unwrap();

    professional.assert_async().await;
    commerce.assert_hits_async(0).await;
}

#[tokio::test]
async fn create_fails_before_posting_when_a_photo_is_missing() {
    let server = MockServer::start_async().await;
    let commerce = server
        .mock_async(|when, then| {
            when.method(POST).path("/inicio/crearServicioComercio");
            then.status(200);
        })
        .await;

    let api = ServiceApi::new(server.base_url());
    let form = ServiceForm::Commerce {
        address: "Av. Mitre 1200".to_string(),
        contact: "info@bakery.test".to_string(),
    };
    let photos = vec![PhotoAttachment::new("/nonexistent/photo.jpg")];
    let result = api
        .create_service("citizen@example.com", "desc", &form, &photos)
        .await;

    assert!(result.is_err());
    commerce.assert_hits_async(0).await;
}
