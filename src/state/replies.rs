//! Fixed reply templates sent to users

pub const WELCOME: &str =
    "Myanmar Link Bot မှ ကြိုဆိုပါတယ်ဗျာ။ ဘာများ ကူညီပေးရမလဲ? (Register / Bill Payment / Support)";

pub const ASK_NAME: &str = "မှတ်ပုံတင်ရန် နာမည်ကို ရိုက်ထည့်ပေးပါ";

pub const BILL_PAYMENT_FORMAT: &str = "Bill Payment လုပ်ရန် Viber User ID, Amount, Method, Reference ID တို့ကို ဤပုံစံအတိုင်း ပေးပါ (ဥပမာ: id:viber:abc amount:123 method:KBZpay ref:XYZ)";

pub const ASK_SUPPORT_MESSAGE: &str =
    "Support အတွက် မေးလိုသော မေးခွန်း သို့မဟုတ် Complaint ကို ရိုက်ထည့်ပေးပါ";

pub const ASK_PHONE: &str = "ဖုန်းနံပါတ် (ဥပမာ: 09xxxxxxxxx) ကို ရိုက်ထည့်ပေးပါ";

pub const INVALID_PHONE: &str =
    "ဖုန်းနံပါတ် format မမှန်ပါဘူးဗျ။ 09 နဲ့ စပြီး ဂဏန်း 7 လုံးကနေ 9 လုံး ပါရပါမယ်။";

pub const ASK_REGION: &str = "နေထိုင်ရာ ဒေသ (ဥပမာ: Yangon, Mandalay) ကို ရိုက်ထည့်ပေးပါ";

pub const REGISTRATION_SUCCEEDED: &str = "မှတ်ပုံတင်ခြင်း အောင်မြင်ပါတယ်ဗျာ။";

pub const REGISTRATION_FAILED: &str = "မှတ်ပုံတင်ခြင်း မအောင်မြင်ပါဘူးဗျာ။";

pub const SUPPORT_RECEIVED: &str = "သင့်မက်ဆေ့ခ်ျကို လက်ခံရရှိပါပြီ။";

pub const SUPPORT_FAILED: &str = "မက်ဆေ့ခ်ျပို့ခြင်း မအောင်မြင်ပါဘူးဗျာ။";

/// Detail shown when the backend gave no message of its own
pub const SERVICE_ERROR: &str = "Service error";

/// Greeting for `subscribed` and `conversation_started`
pub fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Hello {}! {}", name, WELCOME),
        None => WELCOME.to_string(),
    }
}

/// Failure reply carrying backend detail
pub fn failure(prefix: &str, detail: &str) -> String {
    format!("{} {}", prefix, detail)
}
