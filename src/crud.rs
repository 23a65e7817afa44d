//! Admin-side operations on the content collections. Each function takes the
//! current collection and returns the next one; nothing here mutates in place.

use thiserror::Error;
use uuid::Uuid;

use crate::{
    icons::ServiceIcon,
    models::{
        DownloadCategory, DownloadItem, FeaturedRole, Identified, Notice, NoticeCategory, Service,
        Staff, StaffCategory,
    },
};

pub const DEFAULT_AVAILABILITY: &str = "संपर्क गर्नुहोस्";
pub const DEFAULT_STAFF_IMAGE: &str = "https://picsum.photos/seed/doc/400/400";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("no record with id {0}")]
    UnknownRecord(String),
    #[error("drag gesture ended outside the list")]
    IncompleteDrag,
}

/// Nine lowercase alphanumerics, unique for the life of the process in practice.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string().chars().take(9).collect()
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value)
}

#[derive(Debug, Clone, Default)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    pub category: Option<NoticeCategory>,
    pub attachment: String,
}

/// New notices go first.
pub fn add_notice(
    current: &[Notice],
    draft: NoticeDraft,
    date: String,
) -> Result<Vec<Notice>, FormError> {
    let title = required(&draft.title, "title")?;
    let content = required(&draft.content, "content")?;
    let attachment = draft.attachment.trim();

    let notice = Notice {
        id: new_id(),
        title: title.to_string(),
        date,
        content: content.to_string(),
        category: draft.category.unwrap_or(NoticeCategory::General),
        attachment: (!attachment.is_empty()).then(|| attachment.to_string()),
    };

    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(notice);
    next.extend_from_slice(current);
    Ok(next)
}

#[derive(Debug, Clone)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub icon: ServiceIcon,
}

/// New services go last. Test rates are never set from the admin panel.
pub fn add_service(current: &[Service], draft: ServiceDraft) -> Result<Vec<Service>, FormError> {
    let name = required(&draft.name, "name")?;
    let description = required(&draft.description, "description")?;

    let mut next = current.to_vec();
    next.push(Service {
        id: new_id(),
        name: name.to_string(),
        description: description.to_string(),
        icon: draft.icon.name().to_string(),
        test_rates: Vec::new(),
    });
    Ok(next)
}

#[derive(Debug, Clone, Default)]
pub struct StaffDraft {
    pub name: String,
    pub specialization: String,
    pub level: String,
    pub department: String,
    pub availability: String,
    pub image: String,
    pub category: StaffCategory,
    pub featured_role: Option<FeaturedRole>,
}

/// Creates a staff record, or edits the one with id `editing`.
///
/// A featured role is taken away from whoever else holds it in the same
/// returned collection, so the store sees a single replace.
pub fn save_staff(
    current: &[Staff],
    draft: StaffDraft,
    editing: Option<&str>,
) -> Result<Vec<Staff>, FormError> {
    let name = required(&draft.name, "name")?.to_string();
    let specialization = required(&draft.specialization, "specialization")?.to_string();

    if let Some(id) = editing {
        if !current.iter().any(|member| member.id == id) {
            return Err(FormError::UnknownRecord(id.to_string()));
        }
    }

    let mut next: Vec<Staff> = current
        .iter()
        .cloned()
        .map(|mut member| {
            if draft.featured_role.is_some()
                && member.featured_role == draft.featured_role
                && Some(member.id.as_str()) != editing
            {
                member.featured_role = None;
            }
            member
        })
        .collect();

    let image = draft.image.trim().to_string();
    match editing {
        Some(id) => {
            if let Some(member) = next.iter_mut().find(|member| member.id == id) {
                member.name = name;
                member.specialization = specialization;
                member.level = draft.level.trim().to_string();
                member.department = draft.department.trim().to_string();
                member.availability = draft.availability.trim().to_string();
                if !image.is_empty() {
                    member.image = image;
                }
                member.category = draft.category;
                member.featured_role = draft.featured_role;
            }
        }
        None => {
            let availability = draft.availability.trim();
            next.push(Staff {
                id: new_id(),
                name,
                specialization,
                level: draft.level.trim().to_string(),
                department: draft.department.trim().to_string(),
                availability: if availability.is_empty() {
                    DEFAULT_AVAILABILITY.to_string()
                } else {
                    availability.to_string()
                },
                image: if image.is_empty() {
                    DEFAULT_STAFF_IMAGE.to_string()
                } else {
                    image
                },
                category: draft.category,
                featured_role: draft.featured_role,
            });
        }
    }

    Ok(next)
}

#[derive(Debug, Clone, Default)]
pub struct DownloadDraft {
    pub title: String,
    pub category: Option<DownloadCategory>,
    pub file: String,
}

/// New downloads go first.
pub fn add_download(
    current: &[DownloadItem],
    draft: DownloadDraft,
    date: String,
) -> Result<Vec<DownloadItem>, FormError> {
    let title = required(&draft.title, "title")?;
    let file = required(&draft.file, "file")?;

    let item = DownloadItem {
        id: new_id(),
        title: title.to_string(),
        category: draft.category.unwrap_or(DownloadCategory::Form),
        file: file.to_string(),
        date,
    };

    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(item);
    next.extend_from_slice(current);
    Ok(next)
}

pub fn delete_by_id<T: Identified + Clone>(current: &[T], id: &str) -> Result<Vec<T>, FormError> {
    if !current.iter().any(|item| item.id() == id) {
        return Err(FormError::UnknownRecord(id.to_string()));
    }
    Ok(current
        .iter()
        .filter(|item| item.id() != id)
        .cloned()
        .collect())
}

/// Transient state of one drag gesture over the staff list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<usize>,
    target: Option<usize>,
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        self.source = Some(index);
    }

    pub fn enter(&mut self, index: usize) {
        self.target = Some(index);
    }

    /// Ends the gesture: applies the move if both ends were recorded and
    /// resets the state either way.
    pub fn finish<T: Clone>(&mut self, current: &[T]) -> Result<Vec<T>, FormError> {
        let (source, target) = (self.source.take(), self.target.take());
        match (source, target) {
            (Some(source), Some(target)) => reorder(current, source, target),
            _ => Err(FormError::IncompleteDrag),
        }
    }
}

/// Remove at `source`, then insert at `target`.
pub fn reorder<T: Clone>(current: &[T], source: usize, target: usize) -> Result<Vec<T>, FormError> {
    if source >= current.len() || target >= current.len() {
        return Err(FormError::IncompleteDrag);
    }
    let mut next = current.to_vec();
    let moved = next.remove(source);
    next.insert(target, moved);
    Ok(next)
}

pub fn featured(staff: &[Staff], role: FeaturedRole) -> Option<&Staff> {
    staff.iter().find(|member| member.featured_role == Some(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn staff() -> Vec<Staff> {
        seed::collections().staff.as_ref().clone()
    }

    fn holders(staff: &[Staff], role: FeaturedRole) -> Vec<&str> {
        staff
            .iter()
            .filter(|member| member.featured_role == Some(role))
            .map(|member| member.id.as_str())
            .collect()
    }

    fn draft(name: &str, role: Option<FeaturedRole>) -> StaffDraft {
        StaffDraft {
            name: name.to_string(),
            specialization: "मेडिकल अधिकृत".to_string(),
            featured_role: role,
            ..StaffDraft::default()
        }
    }

    #[test]
    fn ids_are_short_and_distinct() {
        let a = new_id();
        let b = new_id();
        assert_eq!(a.len(), 9);
        assert!(a.chars().all(|ch| ch.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn notice_with_blank_title_is_rejected() {
        let notices = seed::collections().notices;
        let result = add_notice(
            &notices,
            NoticeDraft {
                title: "   ".to_string(),
                content: "विवरण".to_string(),
                ..NoticeDraft::default()
            },
            "२०८१-०१-०१".to_string(),
        );
        assert_eq!(result, Err(FormError::MissingField("title")));
    }

    #[test]
    fn new_notice_is_prepended() {
        let notices = seed::collections().notices;
        let next = add_notice(
            &notices,
            NoticeDraft {
                title: "नयाँ सूचना".to_string(),
                content: "विवरण".to_string(),
                category: Some(NoticeCategory::Career),
                attachment: "  ".to_string(),
            },
            "२०८१-०१-०१".to_string(),
        )
        .unwrap();
        assert_eq!(next.len(), notices.len() + 1);
        assert_eq!(next[0].title, "नयाँ सूचना");
        assert_eq!(next[0].category, NoticeCategory::Career);
        assert_eq!(next[0].attachment, None);
        assert_eq!(&next[1..], notices.as_slice());
    }

    #[test]
    fn new_service_is_appended_without_rates() {
        let services = seed::collections().services;
        let next = add_service(
            &services,
            ServiceDraft {
                name: "आँखा सेवा".to_string(),
                description: "आँखा जाँच".to_string(),
                icon: ServiceIcon::Activity,
            },
        )
        .unwrap();
        let added = next.last().unwrap();
        assert_eq!(added.name, "आँखा सेवा");
        assert_eq!(added.icon, "Activity");
        assert!(added.test_rates.is_empty());
        assert_eq!(&next[..services.len()], services.as_slice());
    }

    #[test]
    fn service_requires_description() {
        let result = add_service(
            &[],
            ServiceDraft {
                name: "आँखा सेवा".to_string(),
                description: String::new(),
                icon: ServiceIcon::Pill,
            },
        );
        assert_eq!(result, Err(FormError::MissingField("description")));
    }

    #[test]
    fn download_needs_title_and_file() {
        let downloads = seed::collections().downloads;
        let missing_file = add_download(
            &downloads,
            DownloadDraft {
                title: "फारम".to_string(),
                ..DownloadDraft::default()
            },
            "२०८१/०१/०१".to_string(),
        );
        assert_eq!(missing_file, Err(FormError::MissingField("file")));

        let next = add_download(
            &downloads,
            DownloadDraft {
                title: "फारम".to_string(),
                category: Some(DownloadCategory::Report),
                file: "data:application/pdf;base64,JVBERi0=".to_string(),
            },
            "२०८१/०१/०१".to_string(),
        )
        .unwrap();
        assert_eq!(next.len(), downloads.len() + 1);
        assert_eq!(next[0].title, "फारम");
        assert_eq!(next[0].category, DownloadCategory::Report);
    }

    #[test]
    fn creating_staff_applies_defaults() {
        let next = save_staff(&staff(), draft("नयाँ कर्मचारी", None), None).unwrap();
        let added = next.last().unwrap();
        assert_eq!(added.availability, DEFAULT_AVAILABILITY);
        assert_eq!(added.image, DEFAULT_STAFF_IMAGE);
        assert_eq!(added.category, StaffCategory::Staff);
    }

    #[test]
    fn staff_requires_name_and_post() {
        let mut missing_post = draft("नाम", None);
        missing_post.specialization = " ".to_string();
        assert_eq!(
            save_staff(&staff(), missing_post, None),
            Err(FormError::MissingField("specialization"))
        );
    }

    #[test]
    fn featured_role_moves_to_new_holder() {
        let before = staff();
        assert_eq!(holders(&before, FeaturedRole::Chief), vec!["1"]);

        let next = save_staff(&before, draft("नयाँ प्रमुख", Some(FeaturedRole::Chief)), None).unwrap();
        let chiefs = holders(&next, FeaturedRole::Chief);
        assert_eq!(chiefs.len(), 1);
        assert_eq!(chiefs[0], next.last().unwrap().id);
        // Other slots are untouched.
        assert_eq!(holders(&next, FeaturedRole::Chairperson), vec!["4"]);
        assert_eq!(holders(&next, FeaturedRole::InfoOfficer), vec!["10"]);
    }

    #[test]
    fn editing_keeps_role_on_the_edited_record() {
        let before = staff();
        let mut edit = draft("हरि प्रसाद ढुंगाना", Some(FeaturedRole::Chairperson));
        edit.level = "N/A".to_string();
        let next = save_staff(&before, edit, Some("4")).unwrap();
        assert_eq!(holders(&next, FeaturedRole::Chairperson), vec!["4"]);
        assert_eq!(next.len(), before.len());
    }

    #[test]
    fn editing_merges_fields_in_place() {
        let before = staff();
        let mut edit = draft("डा. सुनिता थापा", Some(FeaturedRole::InfoOfficer));
        edit.department = "बाल रोग".to_string();
        edit.category = StaffCategory::Former;
        let next = save_staff(&before, edit, Some("2")).unwrap();

        let position = next.iter().position(|member| member.id == "2").unwrap();
        assert_eq!(position, 3);
        let edited = &next[position];
        assert_eq!(edited.department, "बाल रोग");
        assert_eq!(edited.category, StaffCategory::Former);
        // Blank image on edit keeps the existing photo.
        assert_eq!(edited.image, before[3].image);
        assert_eq!(holders(&next, FeaturedRole::InfoOfficer), vec!["2"]);
    }

    #[test]
    fn editing_unknown_id_changes_nothing() {
        let result = save_staff(&staff(), draft("कोही", Some(FeaturedRole::Chief)), Some("missing"));
        assert_eq!(result, Err(FormError::UnknownRecord("missing".to_string())));
    }

    #[test]
    fn clearing_role_on_edit_leaves_slot_empty() {
        let next = save_staff(&staff(), draft("डा. रमेश कोइराला", None), Some("1")).unwrap();
        assert!(holders(&next, FeaturedRole::Chief).is_empty());
        assert!(featured(&next, FeaturedRole::Chief).is_none());
    }

    #[test]
    fn repeated_saves_never_duplicate_a_role() {
        let mut current = staff();
        for (index, role) in FeaturedRole::ALL.iter().cycle().take(9).enumerate() {
            let editing = current.get(index % current.len()).map(|member| member.id.clone());
            let name = current[index % current.len()].name.clone();
            current = save_staff(&current, draft(&name, Some(*role)), editing.as_deref()).unwrap();
            for role in FeaturedRole::ALL {
                assert!(holders(&current, role).len() <= 1);
            }
        }
    }

    #[test]
    fn delete_removes_exactly_one() {
        let notices = seed::collections().notices;
        let next = delete_by_id(&notices, "2").unwrap();
        assert_eq!(next.len(), notices.len() - 1);
        assert!(next.iter().all(|notice| notice.id != "2"));
    }

    #[test]
    fn delete_of_unknown_id_is_rejected() {
        let notices = seed::collections().notices;
        assert_eq!(
            delete_by_id(&notices, "nope"),
            Err(FormError::UnknownRecord("nope".to_string()))
        );
    }

    #[test]
    fn reorder_matches_remove_then_insert() {
        let list = vec!['a', 'b', 'c', 'd', 'e'];
        assert_eq!(reorder(&list, 0, 3).unwrap(), vec!['b', 'c', 'd', 'a', 'e']);
        assert_eq!(reorder(&list, 4, 1).unwrap(), vec!['a', 'e', 'b', 'c', 'd']);
        assert_eq!(reorder(&list, 2, 2).unwrap(), list);

        for source in 0..list.len() {
            for target in 0..list.len() {
                let mut expected = list.clone();
                let moved = expected.remove(source);
                expected.insert(target, moved);
                let mut next = reorder(&list, source, target).unwrap();
                assert_eq!(next, expected);
                next.sort();
                assert_eq!(next, list);
            }
        }
    }

    #[test]
    fn drag_without_both_ends_is_a_no_op() {
        let list = staff();
        let mut drag = DragState::default();
        drag.start(1);
        assert_eq!(drag.finish(&list), Err(FormError::IncompleteDrag));
        assert_eq!(drag, DragState::default());

        drag.enter(2);
        assert_eq!(drag.finish(&list), Err(FormError::IncompleteDrag));
    }

    #[test]
    fn drag_applies_and_resets() {
        let list = staff();
        let mut drag = DragState::default();
        drag.start(0);
        drag.enter(2);
        let next = drag.finish(&list).unwrap();
        assert_eq!(next[2].id, list[0].id);
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn reorder_out_of_range_is_rejected() {
        assert_eq!(reorder(&[1, 2, 3], 0, 3), Err(FormError::IncompleteDrag));
        assert_eq!(reorder::<u8>(&[], 0, 0), Err(FormError::IncompleteDrag));
    }
}
