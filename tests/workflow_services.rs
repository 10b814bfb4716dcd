//! My Services screen workflows against a mock backend.
//!
//! These tests drive the screen controller directly with a runtime the
//! screen context borrows, the same way the application loop does.

use httpmock::prelude::*;
use mimuni::screens::my_services::ViewMode;
use mimuni::screens::{MyServicesScreen, Screen, ScreenAction, ScreenContext};
use mimuni::{Config, ServiceApi};
use serde_json::json;
use tokio::runtime::Runtime;

const MAIL: &str = "citizen@example.com";

fn test_config() -> Config {
    let mut config = Config::default();
    config.mail = Some(MAIL.to_string());
    config
}

fn professional_row(id: i64, name: &str) -> serde_json::Value {
    json!({
        "idservicioprofesional": id,
        "nombre": name,
        "apellido": "Perez",
        "contacto": "11-4444-5555",
        "horario": "9 a 18",
        "rubro": "Electrician",
        "descripcion": "Home installs",
        "estado": "HABILITADO"
    })
}

fn commerce_row(id: i64, address: &str) -> serde_json::Value {
    json!({
        "idServicioComercio": id,
        "direccion": address,
        "contacto": "info@shop.test",
        "descripcion": "Bakery",
        "estado": "PENDIENTE"
    })
}

#[test]
fn entering_the_screen_loads_both_lists_once() {
    let server = MockServer::start();
    let professional = server.mock(|when, then| {
        when.method(GET)
            .path("/inicio/misServiciosProfesionales")
            .query_param("mail", MAIL);
        then.status(200)
            .json_body(json!([professional_row(1, "Juan"), professional_row(2, "Maria")]));
    });
    let commerce = server.mock(|when, then| {
        when.method(GET)
            .path("/inicio/misServiciosComercio")
            .query_param("mail", MAIL);
        then.status(200).json_body(json!([commerce_row(9, "Av. Mitre 1200")]));
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = MyServicesScreen::new();
    screen.on_enter(&ctx).unwrap();

    professional.assert_hits(1);
    commerce.assert_hits(1);
    assert!(screen.is_professional_visible());
    assert_eq!(screen.state.professional.len(), 2);
    assert_eq!(screen.state.commerce.len(), 1);
    assert_eq!(screen.state.list_state.selected(), Some(0));
}

#[test]
fn confirmed_delete_refetches_the_affected_list() {
    let server = MockServer::start();
    let mut professional_list = server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosProfesionales");
        then.status(200)
            .json_body(json!([professional_row(1, "Juan"), professional_row(2, "Maria")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosComercio");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/inicio/eliminarServicioProfesional")
            .query_param("mail", MAIL)
            .query_param("idServicio", "2");
        then.status(200);
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = MyServicesScreen::new();
    screen.on_enter(&ctx).unwrap();
    assert_eq!(screen.state.professional.len(), 2);

    // After the delete the backend only knows one listing
    professional_list.delete();
    let professional_list = server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosProfesionales");
        then.status(200).json_body(json!([professional_row(1, "Juan")]));
    });

    screen.state.list_state.select(Some(1));
    screen.request_delete_selected();
    let action = screen.confirm_pending_delete(&ctx);

    delete.assert_hits(1);
    professional_list.assert_hits(1);
    assert!(matches!(action, ScreenAction::ShowToast(_)));
    assert!(screen.state.pending_delete.is_none());
    assert_eq!(screen.state.professional.len(), 1);
    assert_eq!(screen.state.professional[0].id, 1);
}

#[test]
fn failed_delete_still_refetches_and_surfaces_a_toast() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosComercio");
        then.status(200).json_body(json!([commerce_row(9, "Av. Mitre 1200")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosProfesionales");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/inicio/eliminarServicioComercio");
        then.status(500).body("cannot delete");
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = MyServicesScreen::new();
    screen.on_enter(&ctx).unwrap();
    screen.set_view_mode(ViewMode::Commerce);
    screen.request_delete_selected();
    let action = screen.confirm_pending_delete(&ctx);

    delete.assert_hits(1);
    assert!(matches!(action, ScreenAction::ShowToast(_)));
    // The refetch ran even though the delete failed
    assert_eq!(screen.state.commerce.len(), 1);
}

#[test]
fn declined_delete_issues_no_network_traffic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosProfesionales");
        then.status(200).json_body(json!([professional_row(1, "Juan")]));
    });
    let commerce_list = server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosComercio");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/inicio/eliminarServicioProfesional");
        then.status(200);
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = MyServicesScreen::new();
    screen.on_enter(&ctx).unwrap();
    commerce_list.assert_hits(1);

    screen.request_delete_selected();
    assert!(screen.state.pending_delete.is_some());
    screen.decline_pending_delete();

    delete.assert_hits(0);
    commerce_list.assert_hits(1);
    assert_eq!(screen.state.professional.len(), 1);
}

#[test]
fn failed_load_keeps_the_previous_collection() {
    let server = MockServer::start();
    let mut professional_list = server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosProfesionales");
        then.status(200)
            .json_body(json!([professional_row(1, "Juan"), professional_row(2, "Maria")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosComercio");
        then.status(200).json_body(json!([]));
    });

    let config = test_config();
    let api = ServiceApi::new(server.base_url());
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&config, &api, &runtime);

    let mut screen = MyServicesScreen::new();
    screen.on_enter(&ctx).unwrap();
    assert_eq!(screen.state.professional.len(), 2);

    professional_list.delete();
    server.mock(|when, then| {
        when.method(GET).path("/inicio/misServiciosProfesionales");
        then.status(500).body("database unavailable");
    });

    screen.load_professional(&ctx);
    assert_eq!(screen.state.professional.len(), 2);
}
