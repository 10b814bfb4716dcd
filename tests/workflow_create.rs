//! New Service screen submission workflows against a mock backend.

use httpmock::prelude::*;
use mimuni::screens::{NewServiceScreen, ScreenContext};
use mimuni::{Config, ServiceApi, ServiceKind};
use std::io::Write;
use tokio::runtime::Runtime;

const MAIL: &str = "citizen@example.com";

fn test_config() -> Config {
    let mut config = Config::default();
    config.mail = Some(MAIL.to_string());
    config
}

fn write_photo(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"jpeg bytes").unwrap();
    path
}

#[test]
fn commerce_submission_hits_the_commerce_endpoint_with_photos() {
    let server = MockServer::start();
    let commerce = server.mock(|when, then| {
        when.method(POST)
            .path("/inicio/crearServicioComercio")
            .body_contains(MAIL)
            .body_contains("direccion")
            .body_contains("Av. Mitre 1200")
            .body_contains("Fresh bread daily")
            .body_contains("foto_0.jpg")
            .body_contains("foto_1.jpg");
        then.status(200);
    });
    let professional = server.mock(|when, then| {
        when.method(POST).path("/inicio/crearServicioProfesional");
        then.status(200);
    });

    let dir = tempfile::tempdir().unwrap();
    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = NewServiceScreen::new();
    screen.state.address.set_text("Av. Mitre 1200");
    screen.state.contact.set_text("info@bakery.test");
    screen.state.description.set_text("Fresh bread daily");
    screen.attach_photo(write_photo(&dir, "front.jpg"));
    screen.attach_photo(write_photo(&dir, "inside.jpg"));

    screen.submit(&ctx);

    commerce.assert_hits(1);
    professional.assert_hits(0);
    let outcome = screen.state.outcome.as_ref().unwrap();
    assert!(!outcome.is_error);
    assert!(outcome.message.contains("15 business days"));
}

#[test]
fn professional_submission_hits_the_professional_endpoint() {
    let server = MockServer::start();
    let professional = server.mock(|when, then| {
        when.method(POST)
            .path("/inicio/crearServicioProfesional")
            .body_contains("medioContacto")
            .body_contains("horario")
            .body_contains("rubro")
            .body_contains("Electrician");
        then.status(200);
    });
    let commerce = server.mock(|when, then| {
        when.method(POST).path("/inicio/crearServicioComercio");
        then.status(200);
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = NewServiceScreen::new();
    screen.set_kind(ServiceKind::Professional);
    screen.state.contact.set_text("11-4444-5555");
    screen.state.schedule.set_text("Mon-Fri 9 to 18");
    screen.state.category.set_text("Electrician");
    screen.state.description.set_text("Home installs");

    screen.submit(&ctx);

    professional.assert_hits(1);
    commerce.assert_hits(0);
    assert!(!screen.state.outcome.as_ref().unwrap().is_error);
}

#[test]
fn empty_fields_are_submitted_without_validation() {
    let server = MockServer::start();
    let commerce = server.mock(|when, then| {
        when.method(POST).path("/inicio/crearServicioComercio");
        then.status(200);
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = NewServiceScreen::new();
    screen.submit(&ctx);

    commerce.assert_hits(1);
    assert!(!screen.state.outcome.as_ref().unwrap().is_error);
}

#[test]
fn failed_submission_surfaces_an_error_outcome() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/inicio/crearServicioComercio");
        then.status(500).body("storage full");
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = NewServiceScreen::new();
    screen.state.address.set_text("Av. Mitre 1200");
    screen.submit(&ctx);

    let outcome = screen.state.outcome.as_ref().unwrap();
    assert!(outcome.is_error);
    assert!(outcome.message.contains("500"));

    screen.dismiss_outcome();
    assert!(screen.state.outcome.is_none());
    // Entered values survive a failed submission
    assert_eq!(screen.state.address.text(), "Av. Mitre 1200");
}
