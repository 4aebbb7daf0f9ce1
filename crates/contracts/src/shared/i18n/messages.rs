//! Compiled-in message catalogue (English / Arabic)
//!
//! Validation and UI code refer to texts by [`MessageKey`]; the active
//! [`Locale`] is applied only at render time, so switching the language
//! re-renders every visible message, including already reported errors.

use super::locale::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageKey {
    // Page
    AppTitle,
    AppSubtitle,
    ChangeLanguage,

    // Tabs
    TabBusiness,
    TabAvailability,
    TabPlans,
    TabAgreement,

    // Business info
    BusinessTitle,
    BusinessDescription,
    BusinessNameLabel,
    BusinessNamePlaceholder,
    BusinessTypeLabel,
    BusinessTypePlaceholder,
    BusinessAddressLabel,
    BusinessAddressPlaceholder,
    PhoneLabel,
    PhonePlaceholder,
    EmailLabel,
    EmailPlaceholder,
    SocialLinkLabel,
    SocialLinkPlaceholder,
    LogoLabel,
    LogoUpload,
    LogoHintFormat,
    LogoHintSize,
    LogoRemove,

    // Availability
    AvailabilityTitle,
    AvailabilityDescription,
    WorkingDaysLabel,
    SetHoursForAllDays,
    TimeFrom,
    TimeTo,
    TimeHour,
    TimeMinute,
    TimePeriod,
    HolidaysLabel,
    HolidaysPlaceholder,
    HolidaysDescription,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,

    // Plans & payment
    PlansTitle,
    PlansDescription,
    PlanLabel,
    PlanBasicTitle,
    PlanPremiumTitle,
    PerMonth,
    BasicFeatureWebsite,
    BasicFeatureBookings,
    BasicFeatureWhatsapp,
    BasicFeatureAnnualDiscount,
    PremiumFeatureAllBasic,
    PremiumFeatureBookings,
    PremiumFeatureOnlinePayment,
    PaymentMethodLabel,
    PaymentBank,
    PaymentCash,
    PaymentOnline,
    PaymentNotesLabel,
    PaymentNotesPlaceholder,

    // Agreement
    AgreementTitle,
    AgreementDescription,
    AgreementIntro,
    AgreementScopeHeading,
    AgreementScopeBody,
    AgreementThirdPartyHeading,
    AgreementThirdPartyBody,
    AgreementDataHeading,
    AgreementDataBody,
    AgreementLiabilityHeading,
    AgreementLiabilityBody,
    AgreementPaymentHeading,
    AgreementPaymentBody,
    AgreementAcceptanceHeading,
    AgreementAcceptanceBody,
    AgreementCheckbox,

    // Navigation
    Back,
    NextAvailability,
    NextPlans,
    NextAgreement,
    Submit,

    // Validation
    BusinessNameRequired,
    BusinessTypeRequired,
    BusinessAddressRequired,
    PhoneRequired,
    EmailRequired,
    EmailInvalid,
    SocialLinkRequired,
    SocialLinkInvalid,
    WorkingDaysNone,
    WorkingHoursRequired,
    WorkingDaysFixRanges,
    AgreementRequired,
    StartTimeRequired,
    EndTimeRequired,
    EndBeforeStart,
    InvalidTime,

    // Toasts
    SubmitSuccessTitle,
    SubmitSuccessBody,
    SubmitRejectedTitle,
    SubmitRejectedBody,
    ErrorTitle,
    LogoTooLarge,
    LogoWrongType,
    Dismiss,
}

impl MessageKey {
    pub const ALL: &'static [MessageKey] = &[
        MessageKey::AppTitle,
        MessageKey::AppSubtitle,
        MessageKey::ChangeLanguage,
        MessageKey::TabBusiness,
        MessageKey::TabAvailability,
        MessageKey::TabPlans,
        MessageKey::TabAgreement,
        MessageKey::BusinessTitle,
        MessageKey::BusinessDescription,
        MessageKey::BusinessNameLabel,
        MessageKey::BusinessNamePlaceholder,
        MessageKey::BusinessTypeLabel,
        MessageKey::BusinessTypePlaceholder,
        MessageKey::BusinessAddressLabel,
        MessageKey::BusinessAddressPlaceholder,
        MessageKey::PhoneLabel,
        MessageKey::PhonePlaceholder,
        MessageKey::EmailLabel,
        MessageKey::EmailPlaceholder,
        MessageKey::SocialLinkLabel,
        MessageKey::SocialLinkPlaceholder,
        MessageKey::LogoLabel,
        MessageKey::LogoUpload,
        MessageKey::LogoHintFormat,
        MessageKey::LogoHintSize,
        MessageKey::LogoRemove,
        MessageKey::AvailabilityTitle,
        MessageKey::AvailabilityDescription,
        MessageKey::WorkingDaysLabel,
        MessageKey::SetHoursForAllDays,
        MessageKey::TimeFrom,
        MessageKey::TimeTo,
        MessageKey::TimeHour,
        MessageKey::TimeMinute,
        MessageKey::TimePeriod,
        MessageKey::HolidaysLabel,
        MessageKey::HolidaysPlaceholder,
        MessageKey::HolidaysDescription,
        MessageKey::Monday,
        MessageKey::Tuesday,
        MessageKey::Wednesday,
        MessageKey::Thursday,
        MessageKey::Friday,
        MessageKey::Saturday,
        MessageKey::Sunday,
        MessageKey::PlansTitle,
        MessageKey::PlansDescription,
        MessageKey::PlanLabel,
        MessageKey::PlanBasicTitle,
        MessageKey::PlanPremiumTitle,
        MessageKey::PerMonth,
        MessageKey::BasicFeatureWebsite,
        MessageKey::BasicFeatureBookings,
        MessageKey::BasicFeatureWhatsapp,
        MessageKey::BasicFeatureAnnualDiscount,
        MessageKey::PremiumFeatureAllBasic,
        MessageKey::PremiumFeatureBookings,
        MessageKey::PremiumFeatureOnlinePayment,
        MessageKey::PaymentMethodLabel,
        MessageKey::PaymentBank,
        MessageKey::PaymentCash,
        MessageKey::PaymentOnline,
        MessageKey::PaymentNotesLabel,
        MessageKey::PaymentNotesPlaceholder,
        MessageKey::AgreementTitle,
        MessageKey::AgreementDescription,
        MessageKey::AgreementIntro,
        MessageKey::AgreementScopeHeading,
        MessageKey::AgreementScopeBody,
        MessageKey::AgreementThirdPartyHeading,
        MessageKey::AgreementThirdPartyBody,
        MessageKey::AgreementDataHeading,
        MessageKey::AgreementDataBody,
        MessageKey::AgreementLiabilityHeading,
        MessageKey::AgreementLiabilityBody,
        MessageKey::AgreementPaymentHeading,
        MessageKey::AgreementPaymentBody,
        MessageKey::AgreementAcceptanceHeading,
        MessageKey::AgreementAcceptanceBody,
        MessageKey::AgreementCheckbox,
        MessageKey::Back,
        MessageKey::NextAvailability,
        MessageKey::NextPlans,
        MessageKey::NextAgreement,
        MessageKey::Submit,
        MessageKey::BusinessNameRequired,
        MessageKey::BusinessTypeRequired,
        MessageKey::BusinessAddressRequired,
        MessageKey::PhoneRequired,
        MessageKey::EmailRequired,
        MessageKey::EmailInvalid,
        MessageKey::SocialLinkRequired,
        MessageKey::SocialLinkInvalid,
        MessageKey::WorkingDaysNone,
        MessageKey::WorkingHoursRequired,
        MessageKey::WorkingDaysFixRanges,
        MessageKey::AgreementRequired,
        MessageKey::StartTimeRequired,
        MessageKey::EndTimeRequired,
        MessageKey::EndBeforeStart,
        MessageKey::InvalidTime,
        MessageKey::SubmitSuccessTitle,
        MessageKey::SubmitSuccessBody,
        MessageKey::SubmitRejectedTitle,
        MessageKey::SubmitRejectedBody,
        MessageKey::ErrorTitle,
        MessageKey::LogoTooLarge,
        MessageKey::LogoWrongType,
        MessageKey::Dismiss,
    ];

    /// (English, Arabic)
    fn texts(self) -> (&'static str, &'static str) {
        use MessageKey::*;
        match self {
            AppTitle => ("Online Booking System Setup", "إعداد نظام الحجز الإلكتروني"),
            AppSubtitle => (
                "Tell us about your business and we will set up your booking page.",
                "أخبرنا عن نشاطك التجاري وسنقوم بإعداد صفحة الحجز الخاصة بك.",
            ),
            ChangeLanguage => ("Change language", "تغيير اللغة"),

            TabBusiness => ("Business Info", "معلومات النشاط"),
            TabAvailability => ("Availability", "أوقات العمل"),
            TabPlans => ("Plans & Payment", "الخطط والدفع"),
            TabAgreement => ("Agreement", "الاتفاقية"),

            BusinessTitle => ("Business Information", "معلومات النشاط التجاري"),
            BusinessDescription => (
                "Provide details about your business for the booking system",
                "قدّم تفاصيل نشاطك التجاري لنظام الحجز",
            ),
            BusinessNameLabel => ("Business Name", "اسم النشاط التجاري"),
            BusinessNamePlaceholder => ("Your Business Name", "اسم نشاطك التجاري"),
            BusinessTypeLabel => ("Business Type", "نوع النشاط"),
            BusinessTypePlaceholder => (
                "e.g. Salon, Clinic, Consultancy",
                "مثال: صالون، عيادة، استشارات",
            ),
            BusinessAddressLabel => ("Business Address", "عنوان النشاط"),
            BusinessAddressPlaceholder => ("Your business address", "عنوان نشاطك التجاري"),
            PhoneLabel => ("Phone Number", "رقم الهاتف"),
            PhonePlaceholder => ("+971 XX XXX XXXX", "+971 XX XXX XXXX"),
            EmailLabel => ("Email Address", "البريد الإلكتروني"),
            EmailPlaceholder => ("your@email.com", "your@email.com"),
            SocialLinkLabel => ("Instagram or WhatsApp Link", "رابط إنستغرام أو واتساب"),
            SocialLinkPlaceholder => (
                "https://instagram.com/yourbusiness or https://wa.me/971XXXXXXXX",
                "https://instagram.com/yourbusiness أو https://wa.me/971XXXXXXXX",
            ),
            LogoLabel => ("Business Logo", "شعار النشاط"),
            LogoUpload => ("Upload Logo", "رفع الشعار"),
            LogoHintFormat => (
                "Upload your business logo (PNG or JPG)",
                "ارفع شعار نشاطك (PNG أو JPG)",
            ),
            LogoHintSize => ("Maximum file size: 5MB", "الحد الأقصى لحجم الملف: 5 ميغابايت"),
            LogoRemove => ("Remove logo", "إزالة الشعار"),

            AvailabilityTitle => ("Availability", "أوقات العمل"),
            AvailabilityDescription => (
                "Set your working days and hours for the booking system",
                "حدّد أيام وساعات العمل لنظام الحجز",
            ),
            WorkingDaysLabel => ("Working Days & Hours", "أيام وساعات العمل"),
            SetHoursForAllDays => ("Set hours for all days", "تحديد الساعات لجميع الأيام"),
            TimeFrom => ("From", "من"),
            TimeTo => ("To", "إلى"),
            TimeHour => ("Hour", "الساعة"),
            TimeMinute => ("Minute", "الدقيقة"),
            TimePeriod => ("AM/PM", "ص/م"),
            HolidaysLabel => ("Holidays or Exceptions (Optional)", "العطلات أو الاستثناءات (اختياري)"),
            HolidaysPlaceholder => (
                "e.g. Closed on public holidays, Annual leave from 15-30 August",
                "مثال: مغلق في العطلات الرسمية، إجازة سنوية من 15 إلى 30 أغسطس",
            ),
            HolidaysDescription => (
                "List any regular holidays or exceptional closures",
                "اذكر أي عطلات منتظمة أو إغلاقات استثنائية",
            ),
            Monday => ("Monday", "الاثنين"),
            Tuesday => ("Tuesday", "الثلاثاء"),
            Wednesday => ("Wednesday", "الأربعاء"),
            Thursday => ("Thursday", "الخميس"),
            Friday => ("Friday", "الجمعة"),
            Saturday => ("Saturday", "السبت"),
            Sunday => ("Sunday", "الأحد"),

            PlansTitle => ("Plan Selection & Payment", "اختيار الخطة والدفع"),
            PlansDescription => (
                "Choose your subscription plan and payment method",
                "اختر خطة الاشتراك وطريقة الدفع",
            ),
            PlanLabel => ("Select Your Plan", "اختر خطتك"),
            PlanBasicTitle => ("🔹 Basic Plan", "🔹 الخطة الأساسية"),
            PlanPremiumTitle => ("🔸 Premium Plan", "🔸 الخطة المميزة"),
            PerMonth => ("month", "شهرياً"),
            BasicFeatureWebsite => (
                "Full online booking website + mobile booking app",
                "موقع حجز إلكتروني كامل + تطبيق حجز للجوال",
            ),
            BasicFeatureBookings => (
                "Up to 100 bookings/month (expandable on request)",
                "حتى 100 حجز شهرياً (قابلة للزيادة عند الطلب)",
            ),
            BasicFeatureWhatsapp => (
                "WhatsApp integration + 100 WhatsApp Business credits",
                "تكامل مع واتساب + 100 رصيد واتساب للأعمال",
            ),
            BasicFeatureAnnualDiscount => (
                "15% discount for annual subscription",
                "خصم 15٪ على الاشتراك السنوي",
            ),
            PremiumFeatureAllBasic => ("All Basic Plan features", "جميع مزايا الخطة الأساسية"),
            PremiumFeatureBookings => ("Up to 500 bookings/month", "حتى 500 حجز شهرياً"),
            PremiumFeatureOnlinePayment => (
                "Includes direct online payment during booking",
                "يشمل الدفع الإلكتروني المباشر أثناء الحجز",
            ),
            PaymentMethodLabel => ("Payment Method", "طريقة الدفع"),
            PaymentBank => ("Bank Transfer", "تحويل بنكي"),
            PaymentCash => ("Cash", "نقداً"),
            PaymentOnline => ("Online Payment Link", "رابط دفع إلكتروني"),
            PaymentNotesLabel => ("Payment Notes (Optional)", "ملاحظات الدفع (اختياري)"),
            PaymentNotesPlaceholder => (
                "Any additional information about your payment",
                "أي معلومات إضافية حول الدفع",
            ),

            AgreementTitle => ("Service Agreement", "اتفاقية الخدمة"),
            AgreementDescription => (
                "Please review and accept the service agreement",
                "يرجى مراجعة اتفاقية الخدمة والموافقة عليها",
            ),
            AgreementIntro => (
                "This Service Agreement is entered into by and between Rafiq Al Sahab Technology L.L.C, a UAE-registered entity (\"Service Provider\"), and the Client submitting this form (\"Client\"). By submitting this form and checking the consent box below, the Client agrees to the terms outlined herein.",
                "أُبرمت اتفاقية الخدمة هذه بين شركة رفيق السحاب للتكنولوجيا ذ.م.م، وهي جهة مسجلة في الإمارات العربية المتحدة (\"مقدم الخدمة\")، والعميل الذي يقدّم هذا النموذج (\"العميل\"). بتقديم هذا النموذج وتحديد خانة الموافقة أدناه، يوافق العميل على الشروط الواردة فيها.",
            ),
            AgreementScopeHeading => ("1. Scope of Work", "1. نطاق العمل"),
            AgreementScopeBody => (
                "The Service Provider will set up a custom online booking page for the Client's business and integrate it with a third-party booking system. The service is limited to the configuration and handover of the booking link.",
                "يقوم مقدم الخدمة بإعداد صفحة حجز إلكترونية مخصصة لنشاط العميل وربطها بنظام حجز تابع لجهة خارجية. تقتصر الخدمة على الإعداد وتسليم رابط الحجز.",
            ),
            AgreementThirdPartyHeading => ("2. Use of Third-Party Providers", "2. استخدام مزودي الخدمة الخارجيين"),
            AgreementThirdPartyBody => (
                "The booking system is hosted and maintained by an independent third-party provider. The Service Provider acts solely as a configurator and the Client is subject to the provider's terms of service and privacy policy.",
                "يستضيف نظامَ الحجز ويديره مزود خارجي مستقل. يعمل مقدم الخدمة بصفته جهة إعداد فقط، ويخضع العميل لشروط الخدمة وسياسة الخصوصية الخاصة بالمزود.",
            ),
            AgreementDataHeading => ("3. Data Responsibility", "3. المسؤولية عن البيانات"),
            AgreementDataBody => (
                "The Client is solely responsible for the accuracy of all submitted information. The Service Provider will use the data only to complete the requested service and will not share it without consent.",
                "العميل مسؤول وحده عن دقة جميع المعلومات المقدمة. يستخدم مقدم الخدمة البيانات لإتمام الخدمة المطلوبة فقط ولن يشاركها دون موافقة.",
            ),
            AgreementLiabilityHeading => ("4. Limitations of Liability", "4. حدود المسؤولية"),
            AgreementLiabilityBody => (
                "The Service Provider is not liable for downtime or limitations of the third-party provider, for losses caused by incorrect use of the platform, or for any indirect or consequential damages.",
                "لا يتحمل مقدم الخدمة المسؤولية عن أي توقف أو قيود لدى المزود الخارجي، أو عن الخسائر الناتجة عن الاستخدام غير الصحيح للمنصة، أو عن أي أضرار غير مباشرة أو تبعية.",
            ),
            AgreementPaymentHeading => ("5. Payment and Refunds", "5. الدفع والاسترداد"),
            AgreementPaymentBody => (
                "The service fee is one-time and non-refundable once work has commenced. Modifications outside the initial scope may be subject to extra fees.",
                "رسوم الخدمة تُدفع مرة واحدة وغير قابلة للاسترداد بعد بدء العمل. قد تخضع التعديلات خارج النطاق الأولي لرسوم إضافية.",
            ),
            AgreementAcceptanceHeading => ("6. Acceptance of Terms", "6. قبول الشروط"),
            AgreementAcceptanceBody => (
                "By checking the box below and submitting the form, the Client confirms having read and agreed to this Agreement and grants permission to use the submitted data to configure and deploy the service.",
                "بتحديد الخانة أدناه وتقديم النموذج، يؤكد العميل أنه قرأ هذه الاتفاقية ووافق عليها، ويمنح الإذن باستخدام البيانات المقدمة لإعداد الخدمة وتشغيلها.",
            ),
            AgreementCheckbox => (
                "I have read and agree to the terms of the Service Agreement",
                "لقد قرأت شروط اتفاقية الخدمة وأوافق عليها",
            ),

            Back => ("Back", "رجوع"),
            NextAvailability => ("Next: Availability", "التالي: أوقات العمل"),
            NextPlans => ("Next: Plans & Payment", "التالي: الخطط والدفع"),
            NextAgreement => ("Next: Agreement", "التالي: الاتفاقية"),
            Submit => ("Submit Application", "إرسال الطلب"),

            BusinessNameRequired => ("Business name is required", "اسم النشاط التجاري مطلوب"),
            BusinessTypeRequired => ("Business type is required", "نوع النشاط مطلوب"),
            BusinessAddressRequired => ("Business address is required", "عنوان النشاط مطلوب"),
            PhoneRequired => ("Phone number is required", "رقم الهاتف مطلوب"),
            EmailRequired => ("Email is required", "البريد الإلكتروني مطلوب"),
            EmailInvalid => ("Email is invalid", "البريد الإلكتروني غير صالح"),
            SocialLinkRequired => ("Social link is required", "رابط التواصل الاجتماعي مطلوب"),
            SocialLinkInvalid => (
                "Please enter a valid URL starting with http:// or https://",
                "يرجى إدخال رابط صالح يبدأ بـ http:// أو https://",
            ),
            WorkingDaysNone => ("Select at least one working day", "اختر يوم عمل واحداً على الأقل"),
            WorkingHoursRequired => ("Working hours are required", "ساعات العمل مطلوبة"),
            WorkingDaysFixRanges => ("Please fix the time range errors", "يرجى تصحيح أخطاء نطاقات الوقت"),
            AgreementRequired => ("You must agree to the terms", "يجب الموافقة على الشروط"),
            StartTimeRequired => ("Start time is required", "وقت البدء مطلوب"),
            EndTimeRequired => ("End time is required", "وقت الانتهاء مطلوب"),
            EndBeforeStart => ("End time must be after start time", "يجب أن يكون وقت الانتهاء بعد وقت البدء"),
            InvalidTime => ("Time must look like 09:00 AM", "يجب أن يكون الوقت بالشكل 09:00 AM"),

            SubmitSuccessTitle => ("Form submitted", "تم إرسال النموذج"),
            SubmitSuccessBody => (
                "Thank you for your submission. We'll be in touch soon.",
                "شكراً لتقديم طلبك. سنتواصل معك قريباً.",
            ),
            SubmitRejectedTitle => ("Please check the form", "يرجى مراجعة النموذج"),
            SubmitRejectedBody => (
                "Some fields need your attention.",
                "بعض الحقول تحتاج إلى مراجعة.",
            ),
            ErrorTitle => ("Error", "خطأ"),
            LogoTooLarge => ("File size should be less than 5MB", "يجب أن يكون حجم الملف أقل من 5 ميغابايت"),
            LogoWrongType => ("Only JPG and PNG files are accepted", "يُقبل فقط ملفات JPG و PNG"),
            Dismiss => ("Dismiss", "إغلاق"),
        }
    }
}

/// Resolve a message in the given locale
pub fn t(locale: Locale, key: MessageKey) -> &'static str {
    let (en, ar) = key.texts();
    match locale {
        Locale::En => en,
        Locale::Ar => ar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_key_is_translated() {
        for key in MessageKey::ALL {
            for locale in Locale::all() {
                assert!(
                    !t(locale, *key).trim().is_empty(),
                    "{:?} is empty for {:?}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let unique: HashSet<_> = MessageKey::ALL.iter().collect();
        assert_eq!(unique.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_locale_switch() {
        assert_eq!(t(Locale::En, MessageKey::Submit), "Submit Application");
        assert_eq!(t(Locale::Ar, MessageKey::Submit), "إرسال الطلب");
    }
}
