//! Expert Profile
//!
//! トピックとオーディエンスから投稿者のペルソナを導出する

use serde::{Deserialize, Serialize};
use std::fmt;

/// 専門家タイプ
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExpertType {
    /// 医学教育者
    MedicalEducator,
    /// ヘルスケア戦略家
    HealthcareStrategist,
    /// マーケティング戦略家
    MarketingStrategist,
    /// 飲食ビジネスコンサルタント
    CulinaryBusinessConsultant,
    /// 教育コンサルタント
    EducationConsultant,
    /// テクノロジー戦略家
    TechnologyStrategist,
    /// 業界コンサルタント（既定）
    IndustryConsultant,
}

impl ExpertType {
    /// 表示名
    pub fn label(&self) -> &'static str {
        match self {
            ExpertType::MedicalEducator => "medical educator",
            ExpertType::HealthcareStrategist => "healthcare strategist",
            ExpertType::MarketingStrategist => "marketing strategist",
            ExpertType::CulinaryBusinessConsultant => "culinary business consultant",
            ExpertType::EducationConsultant => "education consultant",
            ExpertType::TechnologyStrategist => "technology strategist",
            ExpertType::IndustryConsultant => "industry consultant",
        }
    }

    /// 語り口
    pub fn voice(&self) -> &'static str {
        match self {
            ExpertType::MedicalEducator => "analytical yet accessible",
            ExpertType::HealthcareStrategist => "systematic and evidence-focused",
            ExpertType::MarketingStrategist => "results-oriented and data-driven",
            ExpertType::CulinaryBusinessConsultant => "passionate yet practical",
            ExpertType::EducationConsultant => "thoughtful and student-centered",
            ExpertType::TechnologyStrategist => "forward-thinking and pragmatic",
            ExpertType::IndustryConsultant => "experienced and strategic",
        }
    }

    /// 専門分野のハッシュタグ
    pub fn hashtags(&self) -> [&'static str; 3] {
        match self {
            ExpertType::MedicalEducator => ["#MedicalEducation", "#Healthcare", "#MedicalTraining"],
            ExpertType::HealthcareStrategist => ["#Healthcare", "#HealthTech", "#PatientCare"],
            ExpertType::MarketingStrategist => ["#Marketing", "#Strategy", "#GrowthHacking"],
            ExpertType::CulinaryBusinessConsultant => {
                ["#FoodBusiness", "#Hospitality", "#CulinaryArts"]
            }
            ExpertType::EducationConsultant => ["#Education", "#Learning", "#EdTech"],
            ExpertType::TechnologyStrategist => {
                ["#Technology", "#Innovation", "#DigitalTransformation"]
            }
            ExpertType::IndustryConsultant => ["#Business", "#Strategy", "#Leadership"],
        }
    }
}

impl fmt::Display for ExpertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 専門家プロフィール
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpertProfile {
    /// 専門家タイプ
    pub expert_type: ExpertType,
    /// 信頼性の根拠
    pub credibility: String,
    /// 視点
    pub perspective: String,
    /// 専門領域（トピックそのもの）
    pub specialization: String,
    /// 語り口
    pub voice: String,
}

/// キーワードグループ（優先順）
///
/// 医療グループのみオーディエンスによって分岐するため、ここでは仮のタイプを持つ。
const KEYWORD_GROUPS: &[(&[&str], ExpertType, &str, &str)] = &[
    (
        &["medical", "health"],
        ExpertType::HealthcareStrategist,
        "clinical experience and research",
        "evidence-based insights",
    ),
    (
        &["marketing", "brand"],
        ExpertType::MarketingStrategist,
        "campaigns across industries",
        "data-driven insights",
    ),
    (
        &["pastry", "culinary", "food"],
        ExpertType::CulinaryBusinessConsultant,
        "restaurant operations and trends",
        "industry insights",
    ),
    (
        &["education", "school"],
        ExpertType::EducationConsultant,
        "institutional transformations",
        "systemic insights",
    ),
    (
        &["tech", "software", "ai"],
        ExpertType::TechnologyStrategist,
        "digital transformations",
        "innovation insights",
    ),
];

/// トピックとオーディエンスから専門家プロフィールを構築
///
/// トピックを小文字化して部分一致で判定し、最初に一致したグループを採用する。
pub fn build_expert_profile(topic: &str, audience: &str) -> ExpertProfile {
    let topic_lower = topic.to_lowercase();
    let audience_lower = audience.to_lowercase();

    let matched = KEYWORD_GROUPS
        .iter()
        .find(|(keywords, ..)| keywords.iter().any(|k| topic_lower.contains(k)));

    let (expert_type, credibility, perspective) = match matched {
        Some((_, ExpertType::HealthcareStrategist, credibility, perspective)) => {
            let expert_type = if audience_lower.contains("student") {
                ExpertType::MedicalEducator
            } else {
                ExpertType::HealthcareStrategist
            };
            (expert_type, *credibility, *perspective)
        }
        Some((_, expert_type, credibility, perspective)) => {
            (*expert_type, *credibility, *perspective)
        }
        None => (
            ExpertType::IndustryConsultant,
            "years of experience",
            "practical insights",
        ),
    };

    ExpertProfile {
        expert_type,
        credibility: credibility.to_string(),
        perspective: perspective.to_string(),
        specialization: topic.to_string(),
        voice: expert_type.voice().to_string(),
    }
}

/// オーディエンスを代表する人物像（単数形）
pub fn audience_member(audience: &str) -> &'static str {
    let audience = audience.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| audience.contains(k));

    if has(&["student"]) {
        "student"
    } else if has(&["founder", "ceo"]) {
        "founder"
    } else if has(&["marketing"]) {
        "marketing director"
    } else if has(&["sales"]) {
        "sales manager"
    } else if has(&["developer", "engineer"]) {
        "developer"
    } else if has(&["consultant"]) {
        "consultant"
    } else if has(&["manager"]) {
        "team manager"
    } else if has(&["chef", "culinary"]) {
        "chef"
    } else if has(&["doctor", "physician"]) {
        "physician"
    } else {
        "professional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_educator_for_students() {
        let profile = build_expert_profile("medical research trends", "nursing students");
        assert_eq!(profile.expert_type, ExpertType::MedicalEducator);
        assert_eq!(profile.voice, "analytical yet accessible");
        assert_eq!(profile.credibility, "clinical experience and research");
        assert_eq!(profile.specialization, "medical research trends");
    }

    #[test]
    fn test_healthcare_strategist_without_students() {
        let profile = build_expert_profile("Digital Health", "hospital executives");
        assert_eq!(profile.expert_type, ExpertType::HealthcareStrategist);
        assert_eq!(profile.perspective, "evidence-based insights");
    }

    #[test]
    fn test_keyword_priority() {
        // "health" は "marketing" より優先
        let profile = build_expert_profile("health marketing", "founders");
        assert_eq!(profile.expert_type, ExpertType::HealthcareStrategist);

        let profile = build_expert_profile("brand tech stack", "founders");
        assert_eq!(profile.expert_type, ExpertType::MarketingStrategist);
    }

    #[test]
    fn test_default_industry_consultant() {
        let profile = build_expert_profile("supply logistics", "operators");
        assert_eq!(profile.expert_type, ExpertType::IndustryConsultant);
        assert_eq!(profile.voice, "experienced and strategic");
        assert_eq!(profile.credibility, "years of experience");
    }

    #[test]
    fn test_substring_matching() {
        // "ai" は部分一致
        let profile = build_expert_profile("Retail Chains", "buyers");
        assert_eq!(profile.expert_type, ExpertType::TechnologyStrategist);
    }

    #[test]
    fn test_audience_member() {
        assert_eq!(audience_member("Startup Founders"), "founder");
        assert_eq!(audience_member("CEOs"), "founder");
        assert_eq!(audience_member("software engineers"), "developer");
        assert_eq!(audience_member("sales managers"), "sales manager");
        assert_eq!(audience_member("engineering managers"), "developer");
        assert_eq!(audience_member("business leaders"), "professional");
    }

    #[test]
    fn test_expert_type_label() {
        assert_eq!(
            ExpertType::CulinaryBusinessConsultant.to_string(),
            "culinary business consultant"
        );
    }
}
