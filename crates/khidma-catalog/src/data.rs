// SPDX-License-Identifier: MIT
//
// Compiled-in site content: the service catalog and the testimonials.
//
// The portal has no backend — this data IS the database.  Everything is
// built once behind a `LazyLock` and handed out as shared slices; nothing
// mutates it after load.

use std::sync::LazyLock;

use khidma_core::{Accent, Service, ServiceCategory, Testimonial};

fn service(name: &str, description: &str, accent: Accent) -> Service {
    Service {
        name: name.into(),
        description: description.into(),
        accent,
    }
}

static CATALOG: LazyLock<Vec<ServiceCategory>> = LazyLock::new(|| {
    vec![
        ServiceCategory {
            id: "passports".into(),
            title: "خدمات الجوازات والإقامة".into(),
            services: vec![
                service(
                    "تجديد الإقامة",
                    "تجديد إقامتك أو إقامات عمالتك وأفراد أسرتك قبل انتهاء المهلة النظامية.",
                    Accent::Blue,
                ),
                service(
                    "إصدار إقامة جديدة",
                    "إنهاء إجراءات إصدار الإقامة للقادمين الجدد بعد الفحص الطبي والتأمين.",
                    Accent::Blue,
                ),
                service(
                    "تأشيرة خروج وعودة",
                    "إصدار وتمديد وإلغاء تأشيرات الخروج والعودة المفردة والمتعددة.",
                    Accent::Blue,
                ),
                service(
                    "تأشيرة خروج نهائي",
                    "إصدار أو إلغاء تأشيرة الخروج النهائي ومعالجة الحالات الطارئة.",
                    Accent::Blue,
                ),
            ],
        },
        ServiceCategory {
            id: "visas".into(),
            title: "خدمات التأشيرات ونقل الكفالة".into(),
            services: vec![
                service(
                    "نقل الكفالة",
                    "نقل خدمات العامل إلى كفيل جديد ومتابعة الطلب حتى اكتماله.",
                    Accent::Sky,
                ),
                service(
                    "تمديد تأشيرة الزيارة",
                    "تمديد تأشيرات الزيارة العائلية والتجارية قبل انتهائها.",
                    Accent::Sky,
                ),
                service(
                    "إصدار تأشيرة عائلية",
                    "طلب تأشيرات الزيارة العائلية وتعبئة النماذج المطلوبة.",
                    Accent::Sky,
                ),
            ],
        },
        ServiceCategory {
            id: "labor".into(),
            title: "خدمات وزارة الموارد البشرية".into(),
            services: vec![
                service(
                    "إصدار وتجديد رخص العمل",
                    "إصدار رخص العمل الجديدة وتجديد المنتهية لجميع العمالة.",
                    Accent::Emerald,
                ),
                service(
                    "الإعفاء من رسوم رخص العمل",
                    "دراسة أحقية المنشأة للإعفاء من المقابل المالي وتقديم الطلب.",
                    Accent::Emerald,
                ),
                service(
                    "حل مشاكل حماية الأجور",
                    "معالجة ملاحظات نظام حماية الأجور ورفع الالتزام للمنشأة.",
                    Accent::Emerald,
                ),
                service(
                    "تحديث بيانات العمالة",
                    "تحديث المهن وبيانات العقود في منصات قوى ومكتب العمل.",
                    Accent::Emerald,
                ),
            ],
        },
        ServiceCategory {
            id: "commercial".into(),
            title: "الخدمات التجارية".into(),
            services: vec![
                service(
                    "إصدار سجل تجاري",
                    "تأسيس نشاطك التجاري وإصدار السجل في وقت قياسي.",
                    Accent::Amber,
                ),
                service(
                    "تجديد السجل التجاري",
                    "تجديد السجلات التجارية والاشتراكات الحكومية المرتبطة بها.",
                    Accent::Amber,
                ),
                service(
                    "تصديق العقود من الغرفة التجارية",
                    "تصديق عقود العمل والخطابات الرسمية من الغرفة التجارية.",
                    Accent::Amber,
                ),
                service(
                    "إصدار رخصة بلدية",
                    "استخراج وتجديد الرخص البلدية للمحلات والأنشطة التجارية.",
                    Accent::Amber,
                ),
            ],
        },
        ServiceCategory {
            id: "health".into(),
            title: "الخدمات الصحية".into(),
            services: vec![
                service(
                    "حجز موعد الكشف الطبي",
                    "حجز الفحص الطبي المطلوب لإصدار أو تجديد الإقامة.",
                    Accent::Teal,
                ),
                service(
                    "إصدار التأمين الصحي",
                    "إصدار وثائق التأمين الصحي للأفراد والعمالة بأفضل الأسعار.",
                    Accent::Teal,
                ),
            ],
        },
        ServiceCategory {
            id: "absher".into(),
            title: "خدمات منصة أبشر".into(),
            services: vec![
                service(
                    "تفعيل حساب أبشر",
                    "تفعيل حسابات أبشر أفراد وأعمال وتحديث بيانات التواصل.",
                    Accent::Indigo,
                ),
                service(
                    "الاستعلام عن المخالفات",
                    "الاستعلام عن المخالفات المرورية والبلاغات وسدادها.",
                    Accent::Indigo,
                ),
            ],
        },
    ]
});

static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    vec![
        Testimonial {
            name: "فهد المطيري".into(),
            city: "الرياض".into(),
            rating: 5,
            review: "رسوم رخص العمل كانت مرتفعة جدًا، وفريق \"خدمتك أولويتي\" ساعدني في الحصول على إعفاء للمنشأة. جددت لعمالي بـ 100 ريال فقط. شكرًا لجهودكم.".into(),
        },
        Testimonial {
            name: "عبدالله محمد".into(),
            city: "جدة".into(),
            rating: 5,
            review: "كان كفيلي السابق يرفض نقل كفالتي، وساعدني فريق \"خدمتك أولويتي\" على إتمام النقل بنجاح. أشكركم جزيل الشكر على مصداقيتكم.".into(),
        },
        Testimonial {
            name: "نورة القحطاني".into(),
            city: "الدمام".into(),
            rating: 5,
            review: "كنت بحاجة لإصدار سجل تجاري وبدء مشروعي الخاص. قاموا بإنهاء كافة الإجراءات في وقت قياسي وباحترافية عالية. خدمة رائعة بالفعل.".into(),
        },
        Testimonial {
            name: "سيد خان".into(),
            city: "المدينة المنورة".into(),
            rating: 5,
            review: "خدمة ممتازة وسريعة! ساعدوني في الحصول على الكشف الطبي اللازم لإصدار إقامتي دون أي تعقيدات. أنصح بهم بشدة.".into(),
        },
        Testimonial {
            name: "صالح الغامدي".into(),
            city: "مكة المكرمة".into(),
            rating: 5,
            review: "أكثر خدمة احترافية تعاملت معها. ساعدوني في تصديق العقود من الغرفة التجارية بسرعة. تواصلهم واضح ومتوفرون دائمًا.".into(),
        },
        Testimonial {
            name: "فاطمة أحمد".into(),
            city: "أبها".into(),
            rating: 5,
            review: "واجهت صعوبة في تجديد إقامات أبنائي بعد وفاة زوجي. الفريق تعامل مع الموضوع باحترافية وتعاطف كبير. أنا ممتنة جدًا لهم.".into(),
        },
        Testimonial {
            name: "عائشة العتيبي".into(),
            city: "حائل".into(),
            rating: 5,
            review: "كان لدي تأشيرة خروج نهائي طارئة وتحتاج إلى إلغاء. لقد تعاملوا معها بسرعة لا تصدق وأنقذوني من موقف صعب. لا أستطيع أن أوفيهم حقهم من الشكر.".into(),
        },
        Testimonial {
            name: "مريم إبراهيم".into(),
            city: "تبوك".into(),
            rating: 4,
            review: "ساعدوني في حل مشكلة متعلقة بنظام حماية الأجور. كان الفريق على دراية كبيرة بالأنظمة وتابعوا معي حتى تم حل المشكلة. شكرًا لكم.".into(),
        },
    ]
});

/// The full service catalog, in page order.
pub fn catalog() -> &'static [ServiceCategory] {
    &CATALOG
}

/// The testimonials shown in the carousel, in rotation order.
pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

/// Section ids observed by the navigation tracker, in page order.
pub fn section_ids() -> Vec<String> {
    CATALOG.iter().map(|c| c.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn no_category_is_empty() {
        for category in catalog() {
            assert!(!category.services.is_empty(), "category {} is empty", category.id);
        }
    }

    #[test]
    fn default_section_exists_in_catalog() {
        let default = khidma_core::SiteConfig::default().default_section;
        assert!(catalog().iter().any(|c| c.id == default));
    }

    #[test]
    fn testimonial_ratings_are_in_range() {
        assert!(!testimonials().is_empty());
        for t in testimonials() {
            assert!((1..=5).contains(&t.rating), "{} has rating {}", t.name, t.rating);
        }
    }

    #[test]
    fn section_ids_follow_catalog_order() {
        let ids = section_ids();
        assert_eq!(ids.first().map(String::as_str), Some("passports"));
        assert_eq!(ids.len(), catalog().len());
    }
}
