//! Roadmaps API endpoints

use crate::client::ProductPlanClient;
use crate::endpoints::bars::Bar;
use crate::error::ApiResult;
use crate::query::{add_query_options, RoadmapListOptions};
use crate::response::ApiResponse;
use crate::types::{null_as_default, Links, Timestamps};
use serde::{Deserialize, Serialize};

/// Roadmaps API interface
#[derive(Clone)]
pub struct RoadmapsApi {
    client: ProductPlanClient,
}

impl RoadmapsApi {
    /// Create a new roadmaps API interface
    pub(crate) fn new(client: ProductPlanClient) -> Self {
        Self { client }
    }

    /// List roadmaps visible to the authenticated user
    ///
    /// GET /api/roadmaps
    pub fn list(&self, options: Option<&RoadmapListOptions>) -> ApiResult<ApiResponse<Vec<Roadmap>>> {
        let path = add_query_options("/api/roadmaps", options);
        self.client.get(&path)
    }

    /// Get a roadmap by ID
    ///
    /// GET /api/roadmaps/<id>
    pub fn get(&self, id: u64) -> ApiResult<ApiResponse<Roadmap>> {
        self.client.get(&format!("/api/roadmaps/{id}"))
    }

    /// Get the bars on a roadmap
    ///
    /// GET /api/roadmaps/<id>/bars
    pub fn bars(&self, roadmap_id: u64) -> ApiResult<ApiResponse<Vec<Bar>>> {
        self.client.get(&format!("/api/roadmaps/{roadmap_id}/bars"))
    }
}

/// Roadmap entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// API path of this roadmap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Roadmap ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// Roadmap name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    /// Whether this roadmap is a saved version of another
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_version: bool,
    /// The roadmap this one was copied from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copied_from: Option<Box<Roadmap>>,
    /// Creation and update instants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Timestamps>,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RoadmapLinks>,
}

/// Links on a roadmap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapLinks {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub bars: Links,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub ideas: Links,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub custom_fields: Links,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListOptions;
    use crate::test_support::{blocking, client_for};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn roadmap_json(name: &str) -> serde_json::Value {
        json!({
            "href": "/api/roadmaps/7302",
            "id": 7302,
            "name": name,
            "description": "Load testing plan",
            "owner_email": "user@testmail.com",
            "timestamps": {
                "created_at": "2017-10-03T12:58:07.000Z",
                "updated_at": "2017-10-05T12:02:07.000Z"
            },
            "links": {
                "bars": {"href": "/api/roadmaps/7302/bars"},
                "ideas": {"href": "/api/roadmaps/7302/ideas"},
                "custom_fields": {"href": "/api/roadmaps/7302/custom_fields"}
            }
        })
    }

    fn expected_roadmap(name: &str) -> Roadmap {
        let link = |href: &str| Links::from([("href".to_string(), href.to_string())]);

        Roadmap {
            href: Some("/api/roadmaps/7302".to_string()),
            id: 7302,
            name: name.to_string(),
            description: Some("Load testing plan".to_string()),
            owner_email: Some("user@testmail.com".to_string()),
            is_version: false,
            copied_from: None,
            timestamps: Some(Timestamps {
                created_at: Some(Utc.with_ymd_and_hms(2017, 10, 3, 12, 58, 7).unwrap()),
                updated_at: Some(Utc.with_ymd_and_hms(2017, 10, 5, 12, 2, 7).unwrap()),
            }),
            links: Some(RoadmapLinks {
                bars: link("/api/roadmaps/7302/bars"),
                ideas: link("/api/roadmaps/7302/ideas"),
                custom_fields: link("/api/roadmaps/7302/custom_fields"),
            }),
        }
    }

    #[test]
    fn test_roadmap_null_id_decodes_as_zero() {
        let roadmap: Roadmap = serde_json::from_value(json!({"id": null, "name": "x"})).unwrap();
        assert_eq!(roadmap.id, 0);
        assert_eq!(roadmap.name, "x");
    }

    #[test]
    fn test_roadmap_deserialize() {
        let roadmap: Roadmap = serde_json::from_value(roadmap_json("Roadmap10")).unwrap();
        assert_eq!(roadmap, expected_roadmap("Roadmap10"));
    }

    #[test]
    fn test_roadmap_copied_from_version() {
        let json = json!({
            "id": 8001,
            "name": "Roadmap10 (Q3 snapshot)",
            "is_version": true,
            "copied_from": {"id": 7302, "name": "Roadmap10"}
        });

        let roadmap: Roadmap = serde_json::from_value(json).unwrap();
        assert!(roadmap.is_version);
        assert_eq!(roadmap.copied_from.unwrap().id, 7302);
        assert!(roadmap.timestamps.is_none());
        assert!(roadmap.links.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_roadmaps_with_options() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/roadmaps"))
            .and(query_param("filters", "name=Roadmap10"))
            .and(query_param("include_shared", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                roadmap_json("Roadmap10"),
                roadmap_json("Roadmap11")
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let roadmaps = blocking(move || {
            let options =
                RoadmapListOptions::from(ListOptions::new().with_filters("name=Roadmap10"))
                    .include_shared();
            client_for(&uri).roadmaps().list(Some(&options))
        })
        .await
        .unwrap()
        .into_data();

        assert_eq!(
            roadmaps,
            vec![expected_roadmap("Roadmap10"), expected_roadmap("Roadmap11")]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_roadmaps_without_options_sends_no_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/roadmaps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let response = blocking(move || client_for(&uri).roadmaps().list(None))
            .await
            .unwrap();

        assert!(response.data.is_empty());

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_roadmap() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/roadmaps/7302"))
            .respond_with(ResponseTemplate::new(200).set_body_json(roadmap_json("Roadmap10")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let roadmap = blocking(move || client_for(&uri).roadmaps().get(7302))
            .await
            .unwrap()
            .into_data();

        assert_eq!(roadmap, expected_roadmap("Roadmap10"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_roadmap_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/roadmaps/1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let err = blocking(move || client_for(&uri).roadmaps().get(1))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_roadmap_bars() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/roadmaps/7302/bars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "href": "/api/bars/110240",
                "id": 110240,
                "name": "API Bar",
                "start_date": "2017-06-21",
                "end_date": "2017-09-21",
                "effort": 5,
                "tags": ["ssl", "docker"],
                "links": {"roadmap": {"href": "/api/roadmaps/7302"}}
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let bars = blocking(move || client_for(&uri).roadmaps().bars(7302))
            .await
            .unwrap()
            .into_data();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].id, 110240);
        assert_eq!(bars[0].name, "API Bar");
        assert_eq!(bars[0].links.as_ref().unwrap().roadmap["href"], "/api/roadmaps/7302");
    }
}
