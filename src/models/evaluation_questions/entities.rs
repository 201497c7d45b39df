use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评价量表中的一项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_question.ts")]
pub struct EvaluationQuestion {
    pub id: i64,
    pub question_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 题库为空时写入的默认评价量表
pub const DEFAULT_RUBRIC: [&str; 10] = [
    "ครูเตรียมการสอนและเข้าสอนตรงเวลา",
    "ครูอธิบายเนื้อหาได้ชัดเจน เข้าใจง่าย",
    "ครูใช้สื่อและวิธีการสอนที่หลากหลาย",
    "ครูเปิดโอกาสให้นักเรียนซักถามและแสดงความคิดเห็น",
    "ครูให้ความช่วยเหลือนักเรียนอย่างทั่วถึง",
    "ครูวัดและประเมินผลอย่างยุติธรรม",
    "ครูแจ้งผลการประเมินและข้อเสนอแนะให้นักเรียนทราบ",
    "ครูแต่งกายสุภาพและเป็นแบบอย่างที่ดี",
    "ครูควบคุมชั้นเรียนให้มีบรรยากาศที่เอื้อต่อการเรียนรู้",
    "นักเรียนได้รับความรู้และนำไปใช้ประโยชน์ได้",
];
