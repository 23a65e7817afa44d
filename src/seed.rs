use crate::{
    models::{
        DownloadCategory, DownloadItem, FeaturedRole, Notice, NoticeCategory, Service, Staff,
        StaffCategory, TestRate,
    },
    store::Collections,
};

const SAMPLE_PDF: &str = "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

pub fn collections() -> Collections {
    Collections::new(notices(), services(), staff(), downloads())
}

fn notices() -> Vec<Notice> {
    vec![
        Notice {
            id: "1".to_string(),
            title: "जेष्ठ नागरिकका लागि नि:शुल्क स्वास्थ्य शिविर".to_string(),
            date: "२०८१-०२-०७".to_string(),
            content: "आगामी शुक्रबार अस्पताल प्राङ्गणमा जेष्ठ नागरिकहरूका लागि नि:शुल्क स्वास्थ्य परीक्षण शिविर आयोजना गरिदैछ। यस शिविरमा सुगर, प्रेसर र आँखाको नि:शुल्क जाँच गरिनेछ।".to_string(),
            category: NoticeCategory::General,
            attachment: Some(SAMPLE_PDF.to_string()),
        },
        Notice {
            id: "2".to_string(),
            title: "पोलियो खोप अभियान - दोस्रो चरण".to_string(),
            date: "२०८१-०२-०२".to_string(),
            content: "राष्ट्रिय पोलियो खोप अभियानको दोस्रो चरण आइतबारदेखि सुरु हुँदैछ। आफ्ना बालबालिकालाई नजिकैको खोप केन्द्रमा लैजानुहोला। विस्तृत कार्यतालिका पिडिएफमा हेर्नुहोस्।".to_string(),
            category: NoticeCategory::Vaccination,
            attachment: Some(SAMPLE_PDF.to_string()),
        },
        Notice {
            id: "3".to_string(),
            title: "आकस्मिक कक्ष मर्मत सम्बन्धी सूचना".to_string(),
            date: "२०८१-०१-२८".to_string(),
            content: "अस्पतालको आकस्मिक कक्षमा मर्मत कार्य भइरहेको हुनाले, कृपया वैकल्पिक प्रवेशद्वार प्रयोग गर्नुहोला।".to_string(),
            category: NoticeCategory::Emergency,
            attachment: None,
        },
    ]
}

fn service(id: &str, name: &str, description: &str, icon: &str) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        test_rates: Vec::new(),
    }
}

fn lab_rates() -> Vec<TestRate> {
    [
        ("Blood Sugar (F/PP)", "रु. १००"),
        ("CBC (Complete Blood Count)", "रु. ३००"),
        ("Lipid Profile", "रु. ६००"),
        ("Urine RE/ME", "रु. १००"),
        ("Liver Function Test (LFT)", "रु. ७००"),
        ("Kidney Function Test (KFT)", "रु. ५००"),
        ("Blood Grouping", "रु. ५०"),
        ("Widal Test (Typhoid)", "रु. १५०"),
        ("HBsAg", "रु. २००"),
        ("HIV/VDRL", "रु. ३००"),
    ]
    .into_iter()
    .map(|(test_name, price)| TestRate {
        test_name: test_name.to_string(),
        price: price.to_string(),
    })
    .collect()
}

fn services() -> Vec<Service> {
    let mut lab = service(
        "4",
        "प्रयोगशाला (ल्याब)",
        "पूर्ण सुविधायुक्त आधुनिक प्रयोगशाला सेवा। यहाँ उपलब्ध जाँच र दरहरू हेर्न क्लिक गर्नुहोस्।",
        "TestTube",
    );
    lab.test_rates = lab_rates();

    vec![
        service("1", "ओपिडी सेवा", "साधारण स्वास्थ्य जाँच र विशेषज्ञहरुसँगको परामर्श।", "Stethoscope"),
        service("2", "२४ घण्टा आकस्मिक सेवा", "चौबीसै घण्टा उपलब्ध आकस्मिक चिकित्सा सेवा।", "Ambulance"),
        service("3", "प्रसूति सेवा", "सुरक्षित सुत्केरी र नवजात शिशुको हेरचाह।", "Baby"),
        lab,
        service("5", "फार्मेसी", "सरकारी दरमा उपलब्ध औषधि र अत्यावश्यक औषधिहरू।", "Pill"),
        service("6", "रेडियोलोजी (एक्स-रे)", "एक्स-रे र भिडियो एक्स-रे (यूएसजी) सेवा।", "Activity"),
        service(
            "7",
            "फिजियोथेरापी सेवा",
            "चोटपटक, पुरानो दुखाइ र पुनर्स्थापनाको लागि आधुनिक फिजियोथेरापी।",
            "Accessibility",
        ),
        service("8", "दन्त चिकित्सा सेवा", "दाँतको उपचार, सफाइ र मुखको स्वास्थ्य सम्बन्धी परामर्श।", "Smile"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    specialization: &str,
    level: &str,
    department: &str,
    availability: &str,
    image: &str,
    category: StaffCategory,
    featured_role: Option<FeaturedRole>,
) -> Staff {
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        level: level.to_string(),
        department: department.to_string(),
        availability: availability.to_string(),
        image: image.to_string(),
        category,
        featured_role,
    }
}

fn staff() -> Vec<Staff> {
    vec![
        member(
            "4",
            "हरि प्रसाद ढुंगाना",
            "अध्यक्ष",
            "N/A",
            "व्यवस्थापन समिति",
            "अस्पताल परिसर",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&q=80&w=400",
            StaffCategory::Committee,
            Some(FeaturedRole::Chairperson),
        ),
        member(
            "1",
            "डा. रमेश कोइराला",
            "निमित्त मेडिकल सुपरिटेन्डेन्ट",
            "आठौं",
            "प्रशासन",
            "१०:०० - ५:००",
            "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=400",
            StaffCategory::Chief,
            Some(FeaturedRole::Chief),
        ),
        member(
            "10",
            "नवराज पौडेल",
            "सूचना अधिकारी",
            "छैठौं",
            "प्रशासन / सूचना",
            "१०:०० - ५:००",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=400",
            StaffCategory::Staff,
            Some(FeaturedRole::InfoOfficer),
        ),
        member(
            "2",
            "डा. सुनिता थापा",
            "बाल रोग विशेषज्ञ",
            "नवौं",
            "ओपिडी शाखा",
            "बिहान ८ - दिउँसो १२",
            "https://picsum.photos/seed/doc2/400/400",
            StaffCategory::Staff,
            None,
        ),
        member(
            "3",
            "डा. विकास चौधरी",
            "सर्जन",
            "नवौं",
            "शल्यक्रिया शाखा",
            "अन-कल",
            "https://picsum.photos/seed/doc3/400/400",
            StaffCategory::Staff,
            None,
        ),
    ]
}

fn download(id: &str, title: &str, category: DownloadCategory, date: &str) -> DownloadItem {
    DownloadItem {
        id: id.to_string(),
        title: title.to_string(),
        category,
        file: SAMPLE_PDF.to_string(),
        date: date.to_string(),
    }
}

fn downloads() -> Vec<DownloadItem> {
    vec![
        download(
            "1",
            "बिरामी दर्ता फारम (Patient Registration Form)",
            DownloadCategory::Form,
            "२०८१/०१/१५",
        ),
        download(
            "2",
            "स्वास्थ्य बिमा सम्बन्धी जानकारी पुस्तिका",
            DownloadCategory::Guideline,
            "२०८०/१२/२०",
        ),
        download(
            "3",
            "अस्पतालको वार्षिक प्रगति प्रतिवेदन २०८०/८१",
            DownloadCategory::Report,
            "२०८१/०२/०१",
        ),
        download(
            "4",
            "आकस्मिक सेवा कार्यविधि २०८१",
            DownloadCategory::Guideline,
            "२०८१/०१/१०",
        ),
    ]
}
