use api_contract::{OrganizationRequest, TcListQuery};
use domain::{ObjectType, PowerObject};
use std::sync::Arc;
use tc_client::cache::QueryKey;
use tc_client::resources::{OBJECTS, ORGANIZATIONS};
use tc_client::{InMemoryBackend, Resources};

fn object(id: i64, name: &str) -> PowerObject {
    PowerObject {
        id,
        name: name.to_string(),
        object_type: ObjectType::Kru,
        max_power_mw: 1.0,
        max_power_kw: 1000.0,
        description: None,
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn reads_are_served_from_cache_until_mutation() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.seed_object(object(1, "КРУ-1"));
    let resources = Resources::new(backend.clone());

    assert_eq!(resources.objects().await.expect("first").len(), 1);
    assert!(resources.cache().contains(&QueryKey::new(OBJECTS)));

    // 绕过 Resources 直接写后端：缓存仍返回旧数据。
    backend.seed_object(object(2, "КРУ-2"));
    assert_eq!(resources.objects().await.expect("cached").len(), 1);

    resources.delete_object(1).await.expect("delete");
    assert!(!resources.cache().contains(&QueryKey::new(OBJECTS)));
    let objects = resources.objects().await.expect("refetched");
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].id, 2);
}

#[tokio::test]
async fn failed_mutation_keeps_cache() {
    let backend = Arc::new(InMemoryBackend::new());
    let resources = Resources::new(backend);
    resources.organizations().await.expect("list");
    let err = resources
        .update_organization(
            42,
            &OrganizationRequest {
                name: "Нет такой".to_string(),
                bin: None,
                address: None,
                contact_person: None,
                contact_phone: None,
            },
        )
        .await
        .expect_err("missing");
    assert_eq!(err.status(), Some(404));
    assert!(resources.cache().contains(&QueryKey::new(ORGANIZATIONS)));
}

#[tokio::test]
async fn permit_lists_are_keyed_by_filters() {
    let resources = Resources::new(Arc::new(InMemoryBackend::new()));
    resources
        .technical_conditions(TcListQuery::default())
        .await
        .expect("all");
    resources
        .technical_conditions(TcListQuery::new(
            Some(domain::ResourceType::Electricity),
            Some(domain::TcType::Permanent),
        ))
        .await
        .expect("filtered");
    assert_eq!(resources.cache().len(), 2);
    assert_eq!(resources.cache().invalidate("technical-conditions"), 2);
}
