use std::path::Path;

use uuid::Uuid;

use decora_designs::domain::types::{ColorTone, Preference, PriceCeiling};
use decora_designs::error::DesignsServiceError;
use decora_designs::infra::artifacts::FsArtifactStore;
use decora_designs::infra::uploads::{TempUploads, UploadPart};
use decora_designs::usecase::generate_design::{GenerateDesignInput, GenerateDesignUseCase};

use crate::helpers::{
    FixedRandomSource, MockCatalogRepo, MockDesignRepo, MockFetcher, MockSynthesis,
    neutral_color, neutral_preference, test_furniture,
};

async fn spool_room_photo(root: &Path) -> TempUploads {
    TempUploads::spool(
        root,
        vec![UploadPart {
            file_name: "room.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: b"room-photo".to_vec(),
        }],
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn should_generate_design_end_to_end() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();
    let color = neutral_color();
    let items = vec![
        test_furniture(room_type_id, color.id, 1500),
        test_furniture(room_type_id, color.id, 2500),
        test_furniture(room_type_id, color.id, 3500),
    ];

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let synthesis = MockSynthesis::succeeding();
    let captured = synthesis.captured_handle();
    let records = MockDesignRepo::empty();
    let created = records.created_handle();

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: Some(neutral_preference(user_id)),
            colors: vec![color.clone()],
            furniture: items.clone(),
        },
        records,
        fetcher: MockFetcher::reachable(),
        synthesis,
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(1),
    };

    let output = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await
        .unwrap();

    // The artifact URL follows the public layout and the file holds the
    // synthesized bytes.
    assert!(
        output
            .image_url
            .starts_with(&format!("/generated_images/{user_id}/generated_image_"))
    );
    assert!(output.image_url.ends_with(".png"));
    let stored = artifact_root
        .path()
        .join(user_id.to_string())
        .join(output.image_url.rsplit('/').next().unwrap());
    assert_eq!(std::fs::read(stored).unwrap(), b"synthesized-png");

    // Deterministic selection picked the second candidate.
    assert_eq!(output.design.furniture_used_id, items[1].id);
    assert_eq!(output.design.materials_used_id, items[1].material_id);
    assert_eq!(output.design.budget, None);
    assert_eq!(output.design.created_by, user_id);

    // Referential integrity: the design points at the recommendation from
    // the same run, and that recommendation names the used furniture.
    assert_eq!(output.design.recommendation_id, output.recommendation.id);
    assert!(
        output
            .recommendation
            .furniture_ids
            .contains(&output.design.furniture_used_id)
    );
    assert_eq!(created.lock().unwrap().len(), 1);

    // Prompt carries the selected item's name and the saved vibe; the
    // request contains the upload followed by all three reference images.
    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(
        request.prompt,
        format!("Merge room with {} with schema Modern", items[1].name)
    );
    assert_eq!(request.images.len(), 4);
    assert_eq!(request.images[0].file_name, "room.png");
    assert_eq!(request.images[0].bytes, b"room-photo");
}

#[tokio::test]
async fn should_proceed_without_saved_preference() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();
    let items = vec![
        test_furniture(room_type_id, Uuid::new_v4(), 100),
        test_furniture(room_type_id, Uuid::new_v4(), 200),
    ];

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let synthesis = MockSynthesis::succeeding();
    let captured = synthesis.captured_handle();

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: None,
            colors: vec![],
            furniture: items,
        },
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::reachable(),
        synthesis,
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let output = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await
        .unwrap();

    assert!(output.image_url.ends_with(".png"));
    // No vibe on file, so the prompt has no schema suffix.
    let request = captured.lock().unwrap().clone().unwrap();
    assert!(!request.prompt.contains("with schema"));
}

#[tokio::test]
async fn should_treat_unresolvable_tone_as_unset() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();
    // Preference names a tone, but no catalog color carries it: the color
    // filter is dropped and both items stay candidates.
    let items = vec![
        test_furniture(room_type_id, Uuid::new_v4(), 100),
        test_furniture(room_type_id, Uuid::new_v4(), 200),
    ];

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: Some(Preference {
                user_id,
                vibe: None,
                color_tone: Some(ColorTone::Vibrant),
            }),
            colors: vec![neutral_color()],
            furniture: items,
        },
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::succeeding(),
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await;

    assert!(result.is_ok(), "expected success, got {result:?}");
}

#[tokio::test]
async fn should_fail_with_no_match_surfacing_filters() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();
    let color = neutral_color();
    let color_id = color.id;

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let synthesis = MockSynthesis::succeeding();
    let captured = synthesis.captured_handle();
    let records = MockDesignRepo::empty();
    let created = records.created_handle();

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: Some(neutral_preference(user_id)),
            colors: vec![color],
            // Catalog only stocks a different room.
            furniture: vec![test_furniture(Uuid::new_v4(), color_id, 100)],
        },
        records,
        fetcher: MockFetcher::reachable(),
        synthesis,
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Below(5000),
            photos: uploads.photos().to_vec(),
        })
        .await;

    match result {
        Err(DesignsServiceError::NoMatch {
            room_type_id: rt,
            price_ceiling,
            color_id: c,
        }) => {
            assert_eq!(rt, room_type_id);
            assert_eq!(price_ceiling, PriceCeiling::Below(5000));
            assert_eq!(c, Some(color_id));
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }
    // The pipeline stopped before synthesis or persistence.
    assert!(captured.lock().unwrap().is_none());
    assert!(created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_skip_unreachable_reference_images() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();
    let color = neutral_color();
    let items = vec![
        test_furniture(room_type_id, color.id, 100),
        test_furniture(room_type_id, color.id, 200),
        test_furniture(room_type_id, color.id, 300),
    ];
    let dead_url = items[1].picture_url.clone().unwrap();

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let synthesis = MockSynthesis::succeeding();
    let captured = synthesis.captured_handle();

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: None,
            colors: vec![],
            furniture: items,
        },
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::with_unreachable(&[&dead_url]),
        synthesis,
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await;

    // One dead picture URL does not abort the run; the request carries the
    // upload plus the two reachable references.
    assert!(result.is_ok(), "expected success, got {result:?}");
    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request.images.len(), 3);
}

#[tokio::test]
async fn should_not_record_when_synthesis_fails() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let records = MockDesignRepo::empty();
    let created = records.created_handle();

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: None,
            colors: vec![],
            furniture: vec![test_furniture(room_type_id, Uuid::new_v4(), 100)],
        },
        records,
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::failing(),
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await;

    assert!(
        matches!(result, Err(DesignsServiceError::SynthesisFailed(_))),
        "expected SynthesisFailed, got {result:?}"
    );
    assert!(created.lock().unwrap().is_empty());
    // Nothing was stored either: the artifact root has no user directory.
    assert_eq!(
        std::fs::read_dir(artifact_root.path()).unwrap().count(),
        0
    );
}

#[tokio::test]
async fn should_surface_persistence_failure() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: None,
            colors: vec![],
            furniture: vec![test_furniture(room_type_id, Uuid::new_v4(), 100)],
        },
        records: MockDesignRepo::failing(),
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::succeeding(),
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await;

    assert!(
        matches!(result, Err(DesignsServiceError::Persistence(_))),
        "expected Persistence, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_run_without_photos() {
    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo::empty(),
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::succeeding(),
        artifacts: FsArtifactStore {
            root: tempfile::tempdir().unwrap().path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id: Uuid::new_v4(),
            room_type_id: Uuid::new_v4(),
            price_ceiling: PriceCeiling::Unlimited,
            photos: vec![],
        })
        .await;

    assert!(matches!(result, Err(DesignsServiceError::MissingImage)));
}

#[tokio::test]
async fn selected_item_always_satisfies_the_filters() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();
    let color = neutral_color();
    // Only the first item is under the ceiling; the exclusive bound drops
    // the exact-price item, the room filter drops the third.
    let furniture = vec![
        test_furniture(room_type_id, color.id, 999),
        test_furniture(room_type_id, color.id, 1000),
        test_furniture(Uuid::new_v4(), color.id, 500),
    ];
    let affordable = furniture[0].id;

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: Some(neutral_preference(user_id)),
            colors: vec![color],
            furniture,
        },
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::succeeding(),
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        // An out-of-range index clamps to the (single-element) candidate set.
        rng: FixedRandomSource(7),
    };

    let output = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Below(1000),
            photos: uploads.photos().to_vec(),
        })
        .await
        .unwrap();

    assert_eq!(output.design.furniture_used_id, affordable);
    assert_eq!(output.design.budget, Some(1000));
}

#[tokio::test]
async fn upload_spool_is_removed_after_failed_run() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: None,
            colors: vec![],
            furniture: vec![test_furniture(room_type_id, Uuid::new_v4(), 100)],
        },
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::failing(),
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    let result = usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await;
    assert!(result.is_err());

    // The guard releases the spooled files no matter how the run ended.
    drop(uploads);
    assert_eq!(std::fs::read_dir(upload_root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn upload_spool_is_removed_after_successful_run() {
    let user_id = Uuid::new_v4();
    let room_type_id = Uuid::new_v4();

    let upload_root = tempfile::tempdir().unwrap();
    let artifact_root = tempfile::tempdir().unwrap();
    let uploads = spool_room_photo(upload_root.path()).await;

    let usecase = GenerateDesignUseCase {
        catalog: MockCatalogRepo {
            preference: None,
            colors: vec![],
            furniture: vec![test_furniture(room_type_id, Uuid::new_v4(), 100)],
        },
        records: MockDesignRepo::empty(),
        fetcher: MockFetcher::reachable(),
        synthesis: MockSynthesis::succeeding(),
        artifacts: FsArtifactStore {
            root: artifact_root.path().to_path_buf(),
        },
        rng: FixedRandomSource(0),
    };

    usecase
        .execute(GenerateDesignInput {
            user_id,
            room_type_id,
            price_ceiling: PriceCeiling::Unlimited,
            photos: uploads.photos().to_vec(),
        })
        .await
        .unwrap();

    drop(uploads);
    assert_eq!(std::fs::read_dir(upload_root.path()).unwrap().count(), 0);
}
