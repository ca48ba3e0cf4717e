use serde::{Deserialize, Serialize};

/// # Summary
/// 可请求的测量字段，对应后端 `select` 查询参数中的名称。
///
/// # Invariants
/// - `Display` 输出后端可识别的线路名称 (PascalCase)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Weight,
    BodyMassIndex,
    BasalMetabolicRate,
    WaterPercent,
    MusclePercent,
    FatPercent,
    Glucose,
    Meal,
    BloodPressureSystolic,
    BloodPressureDiastolic,
    HeartRate,
}

impl Field {
    /// `select` 查询参数中使用的线路名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Weight => "Weight",
            Field::BodyMassIndex => "BodyMassIndex",
            Field::BasalMetabolicRate => "BasalMetabolicRate",
            Field::WaterPercent => "WaterPercent",
            Field::MusclePercent => "MusclePercent",
            Field::FatPercent => "FatPercent",
            Field::Glucose => "Glucose",
            Field::Meal => "Meal",
            Field::BloodPressureSystolic => "BloodPressureSystolic",
            Field::BloodPressureDiastolic => "BloodPressureDiastolic",
            Field::HeartRate => "HeartRate",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Summary
/// 血糖读数相对进餐的上下文。
///
/// # Invariants
/// - `NoIndication` 既是显式标记，也是缺少 `meal` 字段时的默认值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MealContext {
    #[default]
    NoIndication,
    NoMeal,
    BeforeMeal,
    AfterMeal,
}

impl MealContext {
    /// 血糖分组的输出顺序
    pub const BUCKET_ORDER: [MealContext; 4] = [
        MealContext::NoMeal,
        MealContext::AfterMeal,
        MealContext::BeforeMeal,
        MealContext::NoIndication,
    ];

    /// 该上下文所属血糖序列的显示标签
    pub fn bucket_label(&self) -> &'static str {
        match self {
            MealContext::NoMeal => "After fast",
            MealContext::AfterMeal => "After meal",
            MealContext::BeforeMeal => "Before meal",
            MealContext::NoIndication => "Other",
        }
    }
}

/// # Summary
/// 单条记录携带的稀疏测量值集合。
///
/// # Invariants
/// - `None` 表示未测量，绝不按 0 处理。
/// - 解码时忽略未知的键。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Values {
    // 体重，单位 kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_mass_index: Option<f64>,
    // 每日千卡
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basal_metabolic_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_percent: Option<f64>,
    // 0..=100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_percent: Option<f64>,
    // 单位 mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal: Option<MealContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
}

/// # Summary
/// 后端返回的一条带时间戳的观测记录。
///
/// # Invariants
/// - `timestamp` 原样保留；期望为 `YYYY-MM-DDTHH:mm:ss` 形式，
///   仅在需要时间点的消费方处解析。
/// - 不同记录的时间戳可以重复。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: String,
    #[serde(default)]
    pub values: Values,
}

impl Record {
    pub fn new(timestamp: impl Into<String>, values: Values) -> Self {
        Self {
            timestamp: timestamp.into(),
            values,
        }
    }
}
