//! Localization table
//!
//! A closed set of supported languages, each with a complete strings
//! bundle. The bundle is a struct of static strings, so a language
//! cannot ship a partial bundle by construction.

use serde::{Deserialize, Serialize};

/// A supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
    Tr,
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ar, Language::Tr];

    /// Parse a stored or user-supplied code; unknown codes are rejected
    ///
    /// Callers loading a persisted code fall back to the default
    /// language when this returns `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            "tr" => Some(Self::Tr),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Tr => "tr",
        }
    }

    /// Whether the language renders right-to-left
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// The full strings bundle for this language
    pub fn bundle(self) -> &'static Translations {
        match self {
            Self::En => &EN,
            Self::Ar => &AR,
            Self::Tr => &TR,
        }
    }
}

/// The complete set of display strings for one language
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    // Header
    pub task_manager: &'static str,
    pub organize_tasks_efficiently: &'static str,
    pub add_task: &'static str,

    // Stats
    pub total_tasks: &'static str,
    pub active_tasks: &'static str,
    pub completed: &'static str,

    // Filters
    pub search_tasks: &'static str,
    pub all_tasks: &'static str,
    pub active: &'static str,
    pub all_priorities: &'static str,
    pub high_priority: &'static str,
    pub medium_priority: &'static str,
    pub low_priority: &'static str,

    // Task form
    pub add_new_task: &'static str,
    pub edit_task: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub due_date: &'static str,
    pub due_date_optional: &'static str,
    pub enter_task_title: &'static str,
    pub enter_task_description: &'static str,
    pub pending: &'static str,
    pub in_progress: &'static str,
    pub update_task: &'static str,
    pub cancel: &'static str,

    // Task item
    pub today: &'static str,
    pub overdue: &'static str,
    pub are_you_sure: &'static str,

    // Validation
    pub title_required: &'static str,
    pub description_required: &'static str,

    // Empty state
    pub no_tasks_found: &'static str,
    pub create_first_task: &'static str,

    // Priority levels
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,

    // Status
    pub tasks: &'static str,
}

static EN: Translations = Translations {
    task_manager: "Task Manager",
    organize_tasks_efficiently: "Organize your tasks efficiently",
    add_task: "Add Task",
    total_tasks: "Total Tasks",
    active_tasks: "Active Tasks",
    completed: "Completed",
    search_tasks: "Search tasks...",
    all_tasks: "All Tasks",
    active: "Active",
    all_priorities: "All Priorities",
    high_priority: "High Priority",
    medium_priority: "Medium Priority",
    low_priority: "Low Priority",
    add_new_task: "Add New Task",
    edit_task: "Edit Task",
    title: "Title",
    description: "Description",
    priority: "Priority",
    status: "Status",
    due_date: "Due Date",
    due_date_optional: "Due Date (Optional)",
    enter_task_title: "Enter task title",
    enter_task_description: "Enter task description",
    pending: "Pending",
    in_progress: "In Progress",
    update_task: "Update Task",
    cancel: "Cancel",
    today: "Today",
    overdue: "Overdue",
    are_you_sure: "Are you sure?",
    title_required: "Title is required",
    description_required: "Description is required",
    no_tasks_found: "No tasks found",
    create_first_task: "Create your first task to get started",
    high: "High",
    medium: "Medium",
    low: "Low",
    tasks: "Tasks",
};

static AR: Translations = Translations {
    task_manager: "مدير المهام",
    organize_tasks_efficiently: "نظم مهامك بكفاءة",
    add_task: "إضافة مهمة",
    total_tasks: "إجمالي المهام",
    active_tasks: "المهام النشطة",
    completed: "مكتملة",
    search_tasks: "البحث في المهام...",
    all_tasks: "جميع المهام",
    active: "نشطة",
    all_priorities: "جميع الأولويات",
    high_priority: "أولوية عالية",
    medium_priority: "أولوية متوسطة",
    low_priority: "أولوية منخفضة",
    add_new_task: "إضافة مهمة جديدة",
    edit_task: "تعديل المهمة",
    title: "العنوان",
    description: "الوصف",
    priority: "الأولوية",
    status: "الحالة",
    due_date: "تاريخ الاستحقاق",
    due_date_optional: "تاريخ الاستحقاق (اختياري)",
    enter_task_title: "أدخل عنوان المهمة",
    enter_task_description: "أدخل وصف المهمة",
    pending: "معلقة",
    in_progress: "قيد التنفيذ",
    update_task: "تحديث المهمة",
    cancel: "إلغاء",
    today: "اليوم",
    overdue: "متأخرة",
    are_you_sure: "هل أنت متأكد؟",
    title_required: "العنوان مطلوب",
    description_required: "الوصف مطلوب",
    no_tasks_found: "لم يتم العثور على مهام",
    create_first_task: "أنشئ مهمتك الأولى للبدء",
    high: "عالية",
    medium: "متوسطة",
    low: "منخفضة",
    tasks: "المهام",
};

static TR: Translations = Translations {
    task_manager: "Görev Yöneticisi",
    organize_tasks_efficiently: "Görevlerinizi verimli bir şekilde organize edin",
    add_task: "Görev Ekle",
    total_tasks: "Toplam Görevler",
    active_tasks: "Aktif Görevler",
    completed: "Tamamlanan",
    search_tasks: "Görevlerde ara...",
    all_tasks: "Tüm Görevler",
    active: "Aktif",
    all_priorities: "Tüm Öncelikler",
    high_priority: "Yüksek Öncelik",
    medium_priority: "Orta Öncelik",
    low_priority: "Düşük Öncelik",
    add_new_task: "Yeni Görev Ekle",
    edit_task: "Görevi Düzenle",
    title: "Başlık",
    description: "Açıklama",
    priority: "Öncelik",
    status: "Durum",
    due_date: "Bitiş Tarihi",
    due_date_optional: "Bitiş Tarihi (İsteğe Bağlı)",
    enter_task_title: "Görev başlığını girin",
    enter_task_description: "Görev açıklamasını girin",
    pending: "Beklemede",
    in_progress: "Devam Ediyor",
    update_task: "Görevi Güncelle",
    cancel: "İptal",
    today: "Bugün",
    overdue: "Gecikmiş",
    are_you_sure: "Emin misiniz?",
    title_required: "Başlık gerekli",
    description_required: "Açıklama gerekli",
    no_tasks_found: "Görev bulunamadı",
    create_first_task: "Başlamak için ilk görevinizi oluşturun",
    high: "Yüksek",
    medium: "Orta",
    low: "Düşük",
    tasks: "Görevler",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("tr"), Some(Language::Tr));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.as_str()), Some(language));
        }
    }

    #[test]
    fn test_exactly_one_language_is_rtl() {
        let rtl: Vec<_> = Language::ALL.iter().filter(|l| l.is_rtl()).collect();
        assert_eq!(rtl, vec![&Language::Ar]);
    }

    #[test]
    fn test_bundles_are_localized() {
        assert_eq!(Language::En.bundle().title_required, "Title is required");
        assert_eq!(Language::Tr.bundle().title_required, "Başlık gerekli");
        assert_eq!(Language::Ar.bundle().title_required, "العنوان مطلوب");
    }

    #[test]
    fn test_bundle_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Language::En.bundle()).unwrap();
        assert_eq!(json["taskManager"], "Task Manager");
        assert_eq!(json["noTasksFound"], "No tasks found");
    }

    #[test]
    fn test_language_wire_form() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let language: Language = serde_json::from_str("\"tr\"").unwrap();
        assert_eq!(language, Language::Tr);
    }
}
