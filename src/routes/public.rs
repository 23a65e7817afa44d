use actix_web::{http::header, web, HttpRequest, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;
use url::form_urlencoded;

use crate::{
    advisor::health_advice,
    attachment::{self, Attachment},
    auth::{clear_session_cookie, session_cookie, session_token, LOGIN_ERROR},
    crud::featured,
    filters,
    icons::ServiceIcon,
    models::{DownloadCategory, DownloadItem, FeaturedRole, Notice, Service, Staff, TestRate},
    state::AppState,
    store::Collections,
    templates::{render, Chrome},
    view::View,
};

#[derive(Clone, Debug)]
struct NoticeView {
    id: String,
    title: String,
    date: String,
    content: String,
    category_label: &'static str,
    badge_class: &'static str,
    has_attachment: bool,
    attachment_href: String,
    attachment_is_image: bool,
}

#[derive(Clone, Debug)]
struct ServiceCard {
    id: String,
    name: String,
    description: String,
    glyph: &'static str,
    has_rates: bool,
}

#[derive(Clone, Debug)]
struct OfficialView {
    slot: &'static str,
    name: String,
    detail: String,
    image: String,
}

#[derive(Clone, Debug)]
struct StaffCard {
    name: String,
    specialization: String,
    level: String,
    department: String,
    availability: String,
    image: String,
}

#[derive(Clone, Debug)]
struct DownloadView {
    title: String,
    category_label: &'static str,
    date: String,
    href: String,
}

#[derive(Clone, Debug)]
struct FilterChip {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    chrome: Chrome,
    notices: Vec<NoticeView>,
    officials: Vec<OfficialView>,
    query: String,
    advice: String,
    has_advice: bool,
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate {
    chrome: Chrome,
    services: Vec<ServiceCard>,
}

#[derive(Template)]
#[template(path = "service_detail.html")]
struct ServiceDetailTemplate {
    chrome: Chrome,
    service: ServiceCard,
    rates: Vec<TestRate>,
}

#[derive(Template)]
#[template(path = "notices.html")]
struct NoticesTemplate {
    chrome: Chrome,
    notices: Vec<NoticeView>,
}

#[derive(Template)]
#[template(path = "notice_detail.html")]
struct NoticeDetailTemplate {
    chrome: Chrome,
    notice: NoticeView,
}

#[derive(Template)]
#[template(path = "downloads.html")]
struct DownloadsTemplate {
    chrome: Chrome,
    downloads: Vec<DownloadView>,
    search: String,
    category: String,
    chips: Vec<FilterChip>,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    chrome: Chrome,
}

#[derive(Template)]
#[template(path = "staff.html")]
struct StaffTemplate {
    chrome: Chrome,
    title: &'static str,
    members: Vec<StaffCard>,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    chrome: Chrome,
    username: String,
    password: String,
    error: String,
    has_error: bool,
}

#[derive(Deserialize, Default)]
struct PageQuery {
    q: Option<String>,
    category: Option<String>,
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct AdviceForm {
    query: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    for view in View::PUBLIC.into_iter().chain([View::AdminLogin]) {
        cfg.service(web::resource(view.path()).route(web::get().to(
            move |state: web::Data<AppState>, req: HttpRequest, query: web::Query<PageQuery>| {
                show(view, state, req, query)
            },
        )));
    }

    cfg.service(web::resource("/notices/{id}").route(web::get().to(notice_detail)))
        .service(web::resource("/services/{id}").route(web::get().to(service_detail)))
        .service(web::resource("/advice").route(web::post().to(advice)))
        .service(web::resource("/login/submit").route(web::post().to(login)))
        .service(web::resource("/logout").route(web::get().to(logout)))
        .service(web::resource("/files/{kind}/{id}").route(web::get().to(attachment_file)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn show(
    view: View,
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    page(view, &state, &req, &query)
}

/// Renders the page for one selector value from a single content snapshot.
fn page(view: View, state: &AppState, req: &HttpRequest, query: &PageQuery) -> HttpResponse {
    let content = state.store.snapshot();
    let chrome = Chrome::new(view, state, req);

    match view {
        View::Home => render(home_template(chrome, &content, String::new(), None)),
        View::Services => render(ServicesTemplate {
            chrome,
            services: content.services.iter().map(service_card).collect(),
        }),
        View::Notices => render(NoticesTemplate {
            chrome,
            notices: content.notices.iter().map(notice_view).collect(),
        }),
        View::Downloads => {
            let search = query.q.clone().unwrap_or_default();
            let category = query
                .category
                .as_deref()
                .and_then(DownloadCategory::from_code);
            render(DownloadsTemplate {
                chrome,
                downloads: filter_downloads(&content.downloads, &search, category)
                    .into_iter()
                    .map(download_view)
                    .collect(),
                chips: filter_chips(&search, category),
                category: category.map(DownloadCategory::code).unwrap_or("").to_string(),
                search,
            })
        }
        View::About => render(AboutTemplate { chrome }),
        View::Committee | View::Chiefs | View::CurrentStaff | View::FormerStaff => {
            render(StaffTemplate {
                chrome,
                title: view.title(),
                members: content
                    .staff
                    .iter()
                    .filter(|member| Some(member.category) == view.staff_category())
                    .map(staff_card)
                    .collect(),
            })
        }
        View::AdminLogin => render(LoginTemplate {
            chrome,
            username: String::new(),
            password: String::new(),
            error: String::new(),
            has_error: false,
        }),
        View::AdminDashboard => HttpResponse::SeeOther()
            .append_header((header::LOCATION, View::AdminDashboard.path()))
            .finish(),
    }
}

fn home_template(
    chrome: Chrome,
    content: &Collections,
    query: String,
    advice: Option<String>,
) -> HomeTemplate {
    let officials = FeaturedRole::ALL
        .into_iter()
        .filter_map(|role| featured(&content.staff, role).map(|member| official_view(role, member)))
        .collect();

    HomeTemplate {
        chrome,
        notices: content.notices.iter().map(notice_view).collect(),
        officials,
        query,
        has_advice: advice.is_some(),
        advice: advice.unwrap_or_default(),
    }
}

async fn advice(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<AdviceForm>,
) -> HttpResponse {
    let query = form.into_inner().query;
    if query.trim().is_empty() {
        return HttpResponse::SeeOther()
            .append_header((header::LOCATION, View::Home.path()))
            .finish();
    }

    let advice = health_advice(state.advisor.as_ref(), query.trim()).await;
    let content = state.store.snapshot();
    let chrome = Chrome::new(View::Home, &state, &req);
    render(home_template(chrome, &content, query, Some(advice)))
}

async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let form = form.into_inner();
    if state.credentials.verify(&form.username, &form.password) {
        let token = state.sessions.open();
        log::info!("Admin signed in");
        return HttpResponse::SeeOther()
            .append_header((header::LOCATION, View::AdminDashboard.path()))
            .cookie(session_cookie(&req, token))
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish();
    }

    log::warn!("Rejected admin login for user {:?}", form.username);
    render(LoginTemplate {
        chrome: Chrome::new(View::AdminLogin, &state, &req),
        username: form.username,
        password: form.password,
        error: LOGIN_ERROR.to_string(),
        has_error: true,
    })
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(token) = session_token(&req) {
        state.sessions.close(&token);
    }
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, View::Home.path()))
        .cookie(clear_session_cookie())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

async fn notice_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let notices = state.store.notices();
    let Some(notice) = notices.iter().find(|notice| notice.id == id) else {
        return Ok(HttpResponse::NotFound().body("सूचना फेला परेन"));
    };

    Ok(render(NoticeDetailTemplate {
        chrome: Chrome::new(View::Notices, &state, &req),
        notice: notice_view(notice),
    }))
}

async fn service_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let services = state.store.services();
    let Some(service) = services.iter().find(|service| service.id == id) else {
        return Ok(HttpResponse::NotFound().body("सेवा फेला परेन"));
    };

    Ok(render(ServiceDetailTemplate {
        chrome: Chrome::new(View::Services, &state, &req),
        service: service_card(service),
        rates: service.test_rates.clone(),
    }))
}

/// Serves an embedded attachment, or redirects to an external one.
async fn attachment_file(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (kind, id) = path.into_inner();
    let reference = match kind.as_str() {
        "notices" => state
            .store
            .notices()
            .iter()
            .find(|notice| notice.id == id)
            .and_then(|notice| notice.attachment.clone()),
        "downloads" => state
            .store
            .downloads()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.file.clone()),
        _ => None,
    };

    let Some(reference) = reference else {
        return Ok(HttpResponse::NotFound().body("फाइल फेला परेन"));
    };

    match Attachment::parse(&reference) {
        Some(file) if file.is_embedded() => {
            let bytes = file.decode().map_err(actix_web::error::ErrorBadRequest)?;
            Ok(HttpResponse::Ok()
                .content_type(file.content_type())
                .body(bytes))
        }
        Some(Attachment::External(url)) => Ok(HttpResponse::Found()
            .append_header((header::LOCATION, url))
            .finish()),
        _ => Ok(HttpResponse::NotFound().body("फाइल फेला परेन")),
    }
}

fn filter_downloads<'a>(
    downloads: &'a [DownloadItem],
    search: &str,
    category: Option<DownloadCategory>,
) -> Vec<&'a DownloadItem> {
    let needle = search.to_lowercase();
    downloads
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .filter(|item| category.map_or(true, |category| item.category == category))
        .collect()
}

fn filter_chips(search: &str, active: Option<DownloadCategory>) -> Vec<FilterChip> {
    let link = |category: Option<DownloadCategory>| {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !search.is_empty() {
            query.append_pair("q", search);
        }
        if let Some(category) = category {
            query.append_pair("category", category.code());
        }
        let query = query.finish();
        if query.is_empty() {
            View::Downloads.path().to_string()
        } else {
            format!("{}?{query}", View::Downloads.path())
        }
    };

    let mut chips = vec![FilterChip {
        label: "सबै",
        href: link(None),
        active: active.is_none(),
    }];
    chips.extend(DownloadCategory::ALL.into_iter().map(|category| FilterChip {
        label: category.label(),
        href: link(Some(category)),
        active: active == Some(category),
    }));
    chips
}

fn notice_view(notice: &Notice) -> NoticeView {
    let reference = notice.attachment.as_deref().unwrap_or_default();
    let parsed = Attachment::parse(reference);
    NoticeView {
        id: notice.id.clone(),
        title: notice.title.clone(),
        date: notice.date.clone(),
        content: notice.content.clone(),
        category_label: notice.category.label(),
        badge_class: notice.category.badge_class(),
        has_attachment: parsed.is_some(),
        attachment_href: attachment::href(reference, "notices", &notice.id),
        attachment_is_image: parsed.is_some_and(|attachment| attachment.is_image()),
    }
}

fn service_card(service: &Service) -> ServiceCard {
    ServiceCard {
        id: service.id.clone(),
        name: service.name.clone(),
        description: service.description.clone(),
        glyph: ServiceIcon::from_name(&service.icon).glyph(),
        has_rates: !service.test_rates.is_empty(),
    }
}

fn official_view(role: FeaturedRole, member: &Staff) -> OfficialView {
    OfficialView {
        slot: role.label(),
        name: member.name.clone(),
        detail: match role {
            FeaturedRole::InfoOfficer => member.department.clone(),
            _ => member.specialization.clone(),
        },
        image: member.image.clone(),
    }
}

fn staff_card(member: &Staff) -> StaffCard {
    let or_dash = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    StaffCard {
        name: member.name.clone(),
        specialization: member.specialization.clone(),
        level: or_dash(&member.level),
        department: or_dash(&member.department),
        availability: member.availability.clone(),
        image: member.image.clone(),
    }
}

fn download_view(item: &DownloadItem) -> DownloadView {
    DownloadView {
        title: item.title.clone(),
        category_label: item.category.label(),
        date: item.date.clone(),
        href: attachment::href(&item.file, "downloads", &item.id),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header, StatusCode},
        test, App,
    };
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    use super::*;
    use crate::{
        advisor::FALLBACK_ADVICE,
        auth::SESSION_COOKIE,
        crud,
        routes::tests::{body_text, test_state, test_state_with_advice},
    };

    #[actix_web::test]
    async fn every_public_view_renders() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;

        for view in View::PUBLIC.into_iter().chain([View::AdminLogin]) {
            let req = test::TestRequest::get().uri(view.path()).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{view:?}");
            let body = body_text(resp).await;
            assert!(body.contains(view.title()), "{view:?}");
            assert!(body.contains("वि.सं.:"), "{view:?}");
        }
    }

    #[actix_web::test]
    async fn staff_pages_show_only_their_category() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/staff/committee").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("हरि प्रसाद ढुंगाना"));
        assert!(!body.contains("डा. सुनिता थापा"));

        let req = test::TestRequest::get().uri("/staff/former").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("यस विधामा अहिले कुनै विवरण उपलब्ध छैन।"));
    }

    #[actix_web::test]
    async fn home_lists_featured_officials() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("हरि प्रसाद ढुंगाना"));
        assert!(body.contains("डा. रमेश कोइराला"));
        assert!(body.contains("नवराज पौडेल"));
        assert!(body.contains("जेष्ठ नागरिकका लागि नि:शुल्क स्वास्थ्य शिविर"));
    }

    #[actix_web::test]
    async fn correct_credentials_open_the_dashboard() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login/submit")
            .set_form([("username", "admin"), ("password", "beltar123")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/admin");
        let cookie = resp
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .expect("session cookie");

        let req = test::TestRequest::get()
            .uri("/admin/notices")
            .cookie(cookie.into_owned())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(!body.contains(LOGIN_ERROR));
    }

    #[actix_web::test]
    async fn wrong_credentials_stay_on_login_with_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login/submit")
            .set_form([("username", "admin"), ("password", "wrong")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .response()
            .cookies()
            .all(|cookie| cookie.name() != SESSION_COOKIE));
        let body = body_text(resp).await;
        assert!(body.contains(LOGIN_ERROR));
        assert!(body.contains("value=\"admin\""));
    }

    #[actix_web::test]
    async fn logout_ends_the_session() {
        let state = test_state();
        let token = state.sessions.open();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/logout")
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        assert!(!state.sessions.is_active(&token));
    }

    #[actix_web::test]
    async fn advice_shows_answer_or_fallback() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state_with_advice(Some("धेरै पानी पिउनुहोस्।"))))
                .configure(crate::routes::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/advice")
            .set_form([("query", "ज्वरो आयो")])
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("धेरै पानी पिउनुहोस्।"));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state_with_advice(None)))
                .configure(crate::routes::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/advice")
            .set_form([("query", "ज्वरो आयो")])
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains(FALLBACK_ADVICE));
    }

    #[actix_web::test]
    async fn blank_advice_query_is_ignored() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/advice")
            .set_form([("query", "   ")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn embedded_files_are_served_and_links_redirect() {
        let state = test_state();
        let uri = format!("data:application/pdf;base64,{}", STANDARD.encode(b"%PDF-1.4"));
        state
            .store
            .update_downloads(|current| {
                crud::add_download(
                    current,
                    crud::DownloadDraft {
                        title: "फारम".to_string(),
                        category: None,
                        file: uri.clone(),
                    },
                    "२०८१/०१/०१".to_string(),
                )
            })
            .unwrap();
        let id = state.store.downloads()[0].id.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/files/downloads/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"%PDF-1.4");

        let req = test::TestRequest::get().uri("/files/notices/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let req = test::TestRequest::get().uri("/files/notices/3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_notice_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/notices/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/services/4").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("Lipid Profile"));
    }

    #[::core::prelude::v1::test]
    fn download_filter_matches_title_and_category() {
        let content = crate::seed::collections();
        let all = filter_downloads(&content.downloads, "", None);
        assert_eq!(all.len(), 4);

        let guidelines = filter_downloads(&content.downloads, "", Some(DownloadCategory::Guideline));
        assert_eq!(guidelines.len(), 2);

        let search = filter_downloads(&content.downloads, "patient", None);
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].id, "1");

        assert!(filter_downloads(&content.downloads, "   ", None).is_empty());
    }

    #[::core::prelude::v1::test]
    fn chips_keep_the_search_term() {
        let chips = filter_chips("फारम", Some(DownloadCategory::Form));
        assert_eq!(chips.len(), 5);
        assert!(chips[1].active);
        assert!(chips[1].href.starts_with("/downloads?q=%E0%A4%AB"));
        assert!(chips[1].href.ends_with("category=Form"));
        assert_eq!(filter_chips("", None)[0].href, "/downloads");
    }
}
