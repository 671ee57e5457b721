use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    scan::{
        entities::ScanRecord,
        value_objects::{
            GetScanHistoryInput, ImageScanInput, LabelImage, ManualScanInput, ScanHistoryFilter,
        },
    },
};

/// Repository trait for persisted scan records
#[cfg_attr(test, mockall::automock)]
pub trait ScanRepository: Send + Sync {
    fn create_scan(
        &self,
        record: ScanRecord,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;

    /// Records of one user, newest first.
    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: ScanHistoryFilter,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;
}

/// Vision model that turns a label photo into `PRODUCT:` / `INGREDIENTS:` text
#[cfg_attr(test, mockall::automock)]
pub trait LabelTranscriber: Send + Sync {
    fn transcribe_label(
        &self,
        image: LabelImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for scanning products against the caller's profile
pub trait ScanService: Send + Sync {
    fn scan_manual(
        &self,
        identity: Identity,
        input: ManualScanInput,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;

    fn scan_image(
        &self,
        identity: Identity,
        input: ImageScanInput,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;

    fn get_history(
        &self,
        identity: Identity,
        input: GetScanHistoryInput,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;
}
