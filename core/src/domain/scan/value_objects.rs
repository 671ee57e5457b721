#[derive(Debug, Clone)]
pub struct ManualScanInput {
    pub product_name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct ImageScanInput {
    pub image: LabelImage,
}

#[derive(Debug, Clone, Default)]
pub struct GetScanHistoryInput {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHistoryFilter {
    pub offset: u64,
    pub limit: u64,
}

impl ScanHistoryFilter {
    pub const MAX_LIMIT: u64 = 100;
}

impl From<GetScanHistoryInput> for ScanHistoryFilter {
    fn from(input: GetScanHistoryInput) -> Self {
        Self {
            offset: input.offset.map(u64::from).unwrap_or(0),
            limit: input
                .limit
                .map(u64::from)
                .unwrap_or(Self::MAX_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}
