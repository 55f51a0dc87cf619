use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use route_graph::graph::EdgePolicy;
use route_graph::order::OrderForm;
use route_graph::web::api::{
    add_edges, add_vertices, create_graph, create_order, find_route, get_graph, health_check,
    list_sessions, AppState,
};
use route_graph::web::models::*;
use route_graph::web::ServerConfig;
use route_graph::GeoPoint;
use uuid::Uuid;

fn vertex(name: &str, latitude: f64, longitude: f64) -> VertexInput {
    VertexInput {
        name: name.to_string(),
        latitude,
        longitude,
    }
}

fn edge(source: &str, destination: &str, weight: Option<f64>) -> EdgeInput {
    EdgeInput {
        source: source.to_string(),
        destination: destination.to_string(),
        weight,
    }
}

fn route_request(source: &str, destination: &str) -> RouteRequest {
    RouteRequest {
        source: source.to_string(),
        destination: destination.to_string(),
    }
}

// Creates a session holding the A-B-C line plus an isolated vertex D
async fn seeded_session(state: &AppState) -> Uuid {
    let request = CreateGraphRequest {
        vertices: vec![
            vertex("A", 19.0, 72.80),
            vertex("B", 19.0, 72.81),
            vertex("C", 19.0, 72.82),
            vertex("D", 19.5, 73.00),
        ],
        edges: vec![
            edge("A", "B", Some(5.0)),
            edge("B", "C", Some(3.0)),
            edge("A", "C", Some(100.0)),
        ],
        policy: EdgePolicy::Strict,
    };

    let Json(created) = create_graph(State(state.clone()), Json(request))
        .await
        .expect("session created");
    assert_eq!(created.vertices_added, 4);
    assert_eq!(created.edges_added, 3);
    created.session_id
}

#[tokio::test]
async fn test_route_through_session_graph() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let Json(route) = find_route(
        State(state.clone()),
        Path(session_id),
        Json(route_request("A", "C")),
    )
    .await
    .expect("route query succeeds");

    assert!(route.found);
    assert_eq!(route.path, vec!["A", "B", "C"]);
    assert_eq!(route.distance, Some(8.0));
}

#[tokio::test]
async fn test_unreachable_route_is_not_an_error() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let Json(route) = find_route(State(state), Path(session_id), Json(route_request("A", "D")))
        .await
        .expect("route query succeeds");

    assert!(!route.found);
    assert!(route.path.is_empty());
    assert_eq!(route.distance, None);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let state = AppState::new();

    let err = get_graph(State(state.clone()), Path(Uuid::new_v4()))
        .await
        .expect_err("unknown session");
    assert_eq!(err.0, StatusCode::NOT_FOUND);
    assert_eq!(err.1.error, "session_not_found");

    let err = find_route(State(state), Path(Uuid::new_v4()), Json(route_request("A", "B")))
        .await
        .expect_err("unknown session");
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_weight_uses_great_circle_distance() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let Json(added) = add_edges(
        State(state.clone()),
        Path(session_id),
        Json(AddEdgesRequest {
            edges: vec![edge("C", "D", None), edge("D", "Nowhere", None)],
            policy: EdgePolicy::Lenient,
        }),
    )
    .await
    .expect("lenient insert succeeds");
    assert_eq!(added.edges_added, 1);
    assert_eq!(added.edge_count, 4);

    let Json(graph) = get_graph(State(state), Path(session_id))
        .await
        .expect("graph exists");
    let link = graph
        .links
        .iter()
        .find(|l| (l.source == "C" && l.target == "D") || (l.source == "D" && l.target == "C"))
        .expect("C-D link present");
    let expected = GeoPoint::new(19.0, 72.82).distance_km(&GeoPoint::new(19.5, 73.0));
    assert!((link.weight - expected).abs() < 1e-9);
    assert_eq!(graph.nodes.len(), 4);
}

#[tokio::test]
async fn test_strict_edges_reject_missing_endpoint() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let err = add_edges(
        State(state.clone()),
        Path(session_id),
        Json(AddEdgesRequest {
            edges: vec![edge("A", "Z", Some(1.0))],
            policy: EdgePolicy::Strict,
        }),
    )
    .await
    .expect_err("strict insert fails");
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert_eq!(err.1.error, "endpoint_not_found");
}

#[tokio::test]
async fn test_add_vertices_validates_and_is_idempotent() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let err = add_vertices(
        State(state.clone()),
        Path(session_id),
        Json(AddVerticesRequest {
            vertices: vec![vertex("E", 19.0, 72.9), vertex("Bad", 123.0, 0.0)],
        }),
    )
    .await
    .expect_err("invalid latitude");
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert_eq!(err.1.error, "invalid_location");

    let Json(added) = add_vertices(
        State(state),
        Path(session_id),
        Json(AddVerticesRequest {
            vertices: vec![vertex("A", 0.0, 0.0), vertex("E", 19.0, 72.9)],
        }),
    )
    .await
    .expect("valid vertices");
    // "A" already exists and keeps its location
    assert_eq!(added.vertices_added, 1);
    assert_eq!(added.vertex_count, 5);
}

#[tokio::test]
async fn test_place_order() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let form = OrderForm {
        name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "4 Beach Road".to_string(),
        item: "Thali".to_string(),
    };

    let Json(order) = create_order(
        State(state.clone()),
        Path(session_id),
        Json(OrderRequest {
            form: form.clone(),
            customer: GeoPoint::new(19.01, 72.80),
            venue: "A".to_string(),
        }),
    )
    .await
    .expect("order accepted");
    assert_eq!(order.venue, "A");
    assert!(order.message.contains("Thanks for ordering from A"));

    let err = create_order(
        State(state),
        Path(session_id),
        Json(OrderRequest {
            form: OrderForm {
                item: String::new(),
                ..form
            },
            customer: GeoPoint::new(19.01, 72.80),
            venue: "A".to_string(),
        }),
    )
    .await
    .expect_err("blank item");
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert_eq!(err.1.error, "missing_field");
}

#[tokio::test]
async fn test_session_limit() {
    let state = AppState::with_max_sessions(1);

    create_graph(State(state.clone()), Json(CreateGraphRequest::default()))
        .await
        .expect("first session");
    let err = create_graph(State(state.clone()), Json(CreateGraphRequest::default()))
        .await
        .expect_err("limit reached");
    assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);

    let Json(sessions) = list_sessions(State(state.clone())).await.expect("listing");
    assert_eq!(sessions.len(), 1);

    let Json(health) = health_check(State(state)).await.expect("health");
    assert_eq!(health.status, "healthy");
    assert_eq!(health.sessions, 1);
}

#[test]
fn test_server_config_port_resolution() {
    let config = ServerConfig::from_args(vec!["route-server".to_string(), "8080".to_string()]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_sessions, ServerConfig::default().max_sessions);
}

#[tokio::test]
async fn test_rejected_strict_batch_leaves_graph_unchanged() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let Json(before) = get_graph(State(state.clone()), Path(session_id))
        .await
        .expect("graph exists");

    let err = add_edges(
        State(state.clone()),
        Path(session_id),
        Json(AddEdgesRequest {
            // The valid first edge must not be kept once the second is rejected
            edges: vec![edge("A", "D", Some(1.0)), edge("A", "Z", Some(1.0))],
            policy: EdgePolicy::Strict,
        }),
    )
    .await
    .expect_err("strict insert fails");
    assert_eq!(err.0, StatusCode::BAD_REQUEST);

    let Json(after) = get_graph(State(state.clone()), Path(session_id))
        .await
        .expect("graph exists");
    assert_eq!(after.links.len(), before.links.len());
    assert_eq!(after.links.len(), 3);

    let Json(route) = find_route(State(state), Path(session_id), Json(route_request("A", "D")))
        .await
        .expect("route query succeeds");
    assert!(!route.found);
}

#[tokio::test]
async fn test_order_with_absent_field_reports_missing_field() {
    let state = AppState::new();
    let session_id = seeded_session(&state).await;

    let request: OrderRequest = serde_json::from_value(serde_json::json!({
        "name": "Ravi",
        "phone": "555-0100",
        "address": "4 Beach Road",
        "item": "Thali",
        "customer": { "latitude": 19.01, "longitude": 72.80 },
        "venue": "A"
    }))
    .expect("absent form fields default to blank");
    assert!(request.form.email.is_empty());

    let err = create_order(State(state), Path(session_id), Json(request))
        .await
        .expect_err("email missing");
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert_eq!(err.1.error, "missing_field");
    assert!(err.1.message.contains("email"));
}
