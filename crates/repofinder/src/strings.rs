//! Fixed display strings

pub const APP_TITLE: &str = "باحث مشاريع GitHub";
pub const SEARCH_LABEL: &str = "ابحث عن مشاريع";
pub const SEARCH_PLACEHOLDER: &str = "أدخل اسم المشروع أو الكلمات المفتاحية...";
pub const SEARCH_BUTTON: &str = "بحث";
pub const SEARCH_BUTTON_BUSY: &str = "جاري البحث...";

pub const RESULTS_HEADER: &str = "نتائج البحث";

pub const ERROR_TITLE: &str = "خطأ";
pub const EMPTY_QUERY: &str = "الرجاء إدخال كلمات البحث";
pub const NO_RESULTS_TITLE: &str = "لا توجد نتائج";
pub const NO_RESULTS: &str = "لم يتم العثور على مشاريع مطابقة لبحثك";
pub const SEARCH_ERROR_TITLE: &str = "خطأ في البحث";
pub const SEARCH_FAILED: &str = "حدث خطأ أثناء البحث";
pub const SEARCH_FAILED_RETRY: &str = "حدث خطأ أثناء البحث، حاول مرة أخرى";

pub const NO_DESCRIPTION: &str = "لا يوجد وصف";
pub const VIEW_PROJECT: &str = "عرض المشروع";
pub const STAR_ICON: &str = "★";

pub const NOT_FOUND_CODE: &str = "404";
pub const NOT_FOUND_TITLE: &str = "الصفحة غير موجودة";
pub const NOT_FOUND_MESSAGE: &str = "عذراً، الصفحة التي تبحث عنها غير موجودة أو تم نقلها.";
pub const BACK_HOME: &str = "العودة للصفحة الرئيسية";
