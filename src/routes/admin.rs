use actix_web::{http::header, middleware::from_fn, web, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;

use crate::{
    auth::admin_guard,
    crud::{self, DownloadDraft, DragState, FormError, NoticeDraft, ServiceDraft, StaffDraft},
    filters,
    icons::ServiceIcon,
    models::{DownloadCategory, FeaturedRole, NoticeCategory, Staff, StaffCategory},
    state::AppState,
    store::Collections,
    templates::render,
};

pub const DOWNLOAD_ALERT: &str = "कृपया फाइलको शीर्षक र फाइल दुबै छान्नुहोस्।";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Notices,
    Services,
    Staff,
    Downloads,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Notices, Tab::Services, Tab::Staff, Tab::Downloads];

    fn from_kind(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.kind() == kind)
    }

    fn kind(self) -> &'static str {
        match self {
            Tab::Notices => "notices",
            Tab::Services => "services",
            Tab::Staff => "staff",
            Tab::Downloads => "downloads",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::Notices => "सूचनाहरू",
            Tab::Services => "सेवाहरू",
            Tab::Staff => "कर्मचारी",
            Tab::Downloads => "डाउनलोड",
        }
    }

    fn href(self) -> String {
        format!("/admin/{}", self.kind())
    }

    fn redirect(self) -> HttpResponse {
        HttpResponse::SeeOther()
            .append_header((header::LOCATION, self.href()))
            .finish()
    }
}

#[derive(Clone, Debug)]
struct TabLink {
    label: &'static str,
    href: String,
    active: bool,
    count: usize,
}

#[derive(Clone, Debug)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Clone, Debug)]
struct Row {
    id: String,
    title: String,
    subtitle: String,
    badge: &'static str,
    date: String,
}

#[derive(Clone, Debug)]
struct StaffRow {
    index: usize,
    id: String,
    name: String,
    specialization: String,
    category_label: &'static str,
    role_label: &'static str,
    image: String,
}

#[derive(Clone, Debug, Default)]
struct StaffFormView {
    editing_id: String,
    is_editing: bool,
    name: String,
    specialization: String,
    level: String,
    department: String,
    availability: String,
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
struct AdminDashboardTemplate {
    tabs: Vec<TabLink>,
    show_notices: bool,
    show_services: bool,
    show_staff: bool,
    show_downloads: bool,
    rows: Vec<Row>,
    staff_rows: Vec<StaffRow>,
    staff_form: StaffFormView,
    notice_categories: Vec<SelectOption>,
    icons: Vec<SelectOption>,
    staff_categories: Vec<SelectOption>,
    featured_roles: Vec<SelectOption>,
    download_categories: Vec<SelectOption>,
    alert: String,
    has_alert: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct NoticeForm {
    title: String,
    content: String,
    category: String,
    attachment: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ServiceForm {
    name: String,
    description: String,
    icon: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct StaffForm {
    editing_id: String,
    name: String,
    specialization: String,
    level: String,
    department: String,
    availability: String,
    image: String,
    category: String,
    featured_role: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DownloadForm {
    title: String,
    category: String,
    file: String,
}

#[derive(Deserialize)]
struct DeleteForm {
    confirmed: Option<String>,
}

#[derive(Deserialize)]
struct ReorderForm {
    source: Option<String>,
    target: Option<String>,
}

#[derive(Deserialize)]
struct EditQuery {
    edit: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(from_fn(admin_guard))
            .service(web::resource("").route(web::get().to(index)))
            .service(web::resource("/").route(web::get().to(index)))
            .service(
                web::resource("/notices")
                    .route(web::get().to(notices))
                    .route(web::post().to(create_notice)),
            )
            .service(
                web::resource("/services")
                    .route(web::get().to(services))
                    .route(web::post().to(create_service)),
            )
            .service(
                web::resource("/staff")
                    .route(web::get().to(staff))
                    .route(web::post().to(save_staff)),
            )
            .service(web::resource("/staff/reorder").route(web::post().to(reorder_staff)))
            .service(
                web::resource("/downloads")
                    .route(web::get().to(downloads))
                    .route(web::post().to(create_download)),
            )
            .service(web::resource("/{kind}/{id}/delete").route(web::post().to(delete))),
    );
}

async fn index() -> HttpResponse {
    Tab::Notices.redirect()
}

async fn notices(state: web::Data<AppState>) -> HttpResponse {
    render(dashboard(&state.store.snapshot(), Tab::Notices, None, None))
}

async fn services(state: web::Data<AppState>) -> HttpResponse {
    render(dashboard(&state.store.snapshot(), Tab::Services, None, None))
}

async fn staff(state: web::Data<AppState>, query: web::Query<EditQuery>) -> HttpResponse {
    let content = state.store.snapshot();
    let editing = query
        .edit
        .as_deref()
        .and_then(|id| content.staff.iter().find(|member| member.id == id));
    render(dashboard(&content, Tab::Staff, editing, None))
}

async fn downloads(state: web::Data<AppState>) -> HttpResponse {
    render(dashboard(&state.store.snapshot(), Tab::Downloads, None, None))
}

async fn create_notice(state: web::Data<AppState>, form: web::Form<NoticeForm>) -> HttpResponse {
    let form = form.into_inner();
    let draft = NoticeDraft {
        title: form.title,
        content: form.content,
        category: NoticeCategory::from_code(&form.category),
        attachment: form.attachment,
    };
    let date = state.clock.today('-');

    match state
        .store
        .update_notices(|current| crud::add_notice(current, draft, date))
    {
        Ok(()) => log::info!("Notice published"),
        Err(err) => log::debug!("Notice not saved: {err}"),
    }
    Tab::Notices.redirect()
}

async fn create_service(state: web::Data<AppState>, form: web::Form<ServiceForm>) -> HttpResponse {
    let form = form.into_inner();
    let draft = ServiceDraft {
        name: form.name,
        description: form.description,
        icon: ServiceIcon::from_name(&form.icon),
    };

    match state
        .store
        .update_services(|current| crud::add_service(current, draft))
    {
        Ok(()) => log::info!("Service added"),
        Err(err) => log::debug!("Service not saved: {err}"),
    }
    Tab::Services.redirect()
}

async fn save_staff(state: web::Data<AppState>, form: web::Form<StaffForm>) -> HttpResponse {
    let form = form.into_inner();
    let editing = Some(form.editing_id.trim()).filter(|id| !id.is_empty());
    let draft = StaffDraft {
        name: form.name,
        specialization: form.specialization,
        level: form.level,
        department: form.department,
        availability: form.availability,
        image: form.image,
        category: StaffCategory::from_code(&form.category).unwrap_or_default(),
        featured_role: FeaturedRole::from_code(&form.featured_role),
    };

    match state
        .store
        .update_staff(|current| crud::save_staff(current, draft, editing))
    {
        Ok(()) => match editing {
            Some(id) => log::info!("Staff record {id} updated"),
            None => log::info!("Staff record added"),
        },
        Err(err) => log::debug!("Staff record not saved: {err}"),
    }
    Tab::Staff.redirect()
}

async fn create_download(
    state: web::Data<AppState>,
    form: web::Form<DownloadForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let draft = DownloadDraft {
        title: form.title,
        category: DownloadCategory::from_code(&form.category),
        file: form.file,
    };
    let date = state.clock.today('/');

    match state
        .store
        .update_downloads(|current| crud::add_download(current, draft, date))
    {
        Ok(()) => {
            log::info!("Download published");
            Tab::Downloads.redirect()
        }
        Err(FormError::MissingField(field)) => {
            log::debug!("Download missing {field}");
            render(dashboard(
                &state.store.snapshot(),
                Tab::Downloads,
                None,
                Some(DOWNLOAD_ALERT),
            ))
        }
        Err(err) => {
            log::debug!("Download not saved: {err}");
            Tab::Downloads.redirect()
        }
    }
}

async fn delete(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse> {
    let (kind, id) = path.into_inner();
    let Some(tab) = Tab::from_kind(&kind) else {
        return Ok(HttpResponse::NotFound().body("Unknown collection"));
    };

    if form.confirmed.as_deref() != Some("yes") {
        return Ok(tab.redirect());
    }

    let outcome = match tab {
        Tab::Notices => state
            .store
            .update_notices(|current| crud::delete_by_id(current, &id)),
        Tab::Services => state
            .store
            .update_services(|current| crud::delete_by_id(current, &id)),
        Tab::Staff => state
            .store
            .update_staff(|current| crud::delete_by_id(current, &id)),
        Tab::Downloads => state
            .store
            .update_downloads(|current| crud::delete_by_id(current, &id)),
    };

    match outcome {
        Ok(()) => log::info!("Deleted {kind} record {id}"),
        Err(err) => log::debug!("Nothing deleted: {err}"),
    }
    Ok(tab.redirect())
}

async fn reorder_staff(
    state: web::Data<AppState>,
    form: web::Form<ReorderForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let index = |value: Option<String>| value.and_then(|value| value.trim().parse::<usize>().ok());

    let mut drag = DragState::default();
    if let Some(source) = index(form.source) {
        drag.start(source);
    }
    if let Some(target) = index(form.target) {
        drag.enter(target);
    }

    match state.store.update_staff(|current| drag.finish(current)) {
        Ok(()) => log::info!("Staff order changed"),
        Err(err) => log::debug!("Staff order unchanged: {err}"),
    }
    Tab::Staff.redirect()
}

fn dashboard(
    content: &Collections,
    tab: Tab,
    editing: Option<&Staff>,
    alert: Option<&str>,
) -> AdminDashboardTemplate {
    let count = |tab: Tab| match tab {
        Tab::Notices => content.notices.len(),
        Tab::Services => content.services.len(),
        Tab::Staff => content.staff.len(),
        Tab::Downloads => content.downloads.len(),
    };
    let tabs = Tab::ALL
        .into_iter()
        .map(|candidate| TabLink {
            label: candidate.label(),
            href: candidate.href(),
            active: candidate == tab,
            count: count(candidate),
        })
        .collect();

    let rows = match tab {
        Tab::Notices => content
            .notices
            .iter()
            .map(|notice| Row {
                id: notice.id.clone(),
                title: notice.title.clone(),
                subtitle: notice.content.clone(),
                badge: notice.category.label(),
                date: notice.date.clone(),
            })
            .collect(),
        Tab::Services => content
            .services
            .iter()
            .map(|service| Row {
                id: service.id.clone(),
                title: service.name.clone(),
                subtitle: service.description.clone(),
                badge: ServiceIcon::from_name(&service.icon).glyph(),
                date: String::new(),
            })
            .collect(),
        Tab::Downloads => content
            .downloads
            .iter()
            .map(|item| Row {
                id: item.id.clone(),
                title: item.title.clone(),
                subtitle: String::new(),
                badge: item.category.label(),
                date: item.date.clone(),
            })
            .collect(),
        Tab::Staff => Vec::new(),
    };

    let staff_rows = content
        .staff
        .iter()
        .enumerate()
        .map(|(index, member)| StaffRow {
            index,
            id: member.id.clone(),
            name: member.name.clone(),
            specialization: member.specialization.clone(),
            category_label: member.category.label(),
            role_label: member.featured_role.map(FeaturedRole::label).unwrap_or(""),
            image: member.image.clone(),
        })
        .collect();

    let staff_form = editing
        .map(|member| StaffFormView {
            editing_id: member.id.clone(),
            is_editing: true,
            name: member.name.clone(),
            specialization: member.specialization.clone(),
            level: member.level.clone(),
            department: member.department.clone(),
            availability: member.availability.clone(),
        })
        .unwrap_or_default();

    let staff_category = editing.map(|member| member.category).unwrap_or_default();
    let featured_role = editing.and_then(|member| member.featured_role);

    AdminDashboardTemplate {
        tabs,
        show_notices: tab == Tab::Notices,
        show_services: tab == Tab::Services,
        show_staff: tab == Tab::Staff,
        show_downloads: tab == Tab::Downloads,
        rows,
        staff_rows,
        staff_form,
        notice_categories: NoticeCategory::ALL
            .into_iter()
            .map(|category| SelectOption {
                value: category.code(),
                label: category.label(),
                selected: category == NoticeCategory::General,
            })
            .collect(),
        icons: ServiceIcon::SELECTABLE
            .into_iter()
            .map(|icon| SelectOption {
                value: icon.name(),
                label: icon.admin_label(),
                selected: icon == ServiceIcon::Stethoscope,
            })
            .collect(),
        staff_categories: StaffCategory::ALL
            .into_iter()
            .map(|category| SelectOption {
                value: category.code(),
                label: category.label(),
                selected: category == staff_category,
            })
            .collect(),
        featured_roles: std::iter::once(SelectOption {
            value: "",
            label: "कुनै पनि होइन",
            selected: featured_role.is_none(),
        })
        .chain(FeaturedRole::ALL.into_iter().map(|role| SelectOption {
            value: role.code(),
            label: role.label(),
            selected: Some(role) == featured_role,
        }))
        .collect(),
        download_categories: DownloadCategory::ALL
            .into_iter()
            .map(|category| SelectOption {
                value: category.code(),
                label: category.label(),
                selected: category == DownloadCategory::Form,
            })
            .collect(),
        has_alert: alert.is_some(),
        alert: alert.unwrap_or_default().to_string(),
    }
}
