//! Conversions between proto messages and domain types.
use crate::lesson::{ContentType, Lesson, LessonPatch, NewLesson, ParseContentTypeError};
use crate::section::{NewSection, Section, SectionPatch};
use crate::server::helpers::nonempty;
use crate::server::proto;

/// `""` means no content type.
pub fn parse_content_type(s: &str) -> Result<Option<ContentType>, ParseContentTypeError> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    s.parse().map(Some)
}

pub fn lesson_to_proto(lesson: &Lesson) -> proto::Lesson {
    proto::Lesson {
        id: lesson.id,
        section_id: lesson.section_id,
        title: lesson.title.clone(),
        content_type: lesson
            .content_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        content_url: lesson.content_url.clone(),
        content: lesson.content.clone(),
        duration: lesson.duration,
        order_number: lesson.order_number,
        is_free: lesson.is_free,
        created_at: lesson.created_at.clone(),
        updated_at: lesson.updated_at.clone(),
    }
}

pub fn section_to_proto(section: &Section) -> proto::Section {
    proto::Section {
        id: section.id,
        course_id: section.course_id,
        title: section.title.clone(),
        description: section.description.clone(),
        order_number: section.order_number,
        created_at: section.created_at.clone(),
        updated_at: section.updated_at.clone(),
    }
}

pub fn new_lesson_from_proto(
    req: proto::CreateLessonRequest,
) -> Result<NewLesson, ParseContentTypeError> {
    Ok(NewLesson {
        section_id: req.section_id,
        title: req.title,
        content_type: parse_content_type(&req.content_type)?,
        content_url: req.content_url.and_then(nonempty),
        content: req.content,
        duration: req.duration,
        order_number: req.order_number,
        is_free: req.is_free,
    })
}

/// Unset fields stay `None`. A content type, when given, must be valid.
pub fn lesson_patch_from_proto(
    req: proto::UpdateLessonRequest,
) -> Result<LessonPatch, ParseContentTypeError> {
    let content_type = req
        .content_type
        .as_deref()
        .map(str::parse::<ContentType>)
        .transpose()?;
    Ok(LessonPatch {
        section_id: req.section_id,
        title: req.title,
        content_type,
        content_url: req.content_url,
        content: req.content,
        duration: req.duration,
        order_number: req.order_number,
        is_free: req.is_free,
    })
}

pub fn new_section_from_proto(req: proto::CreateSectionRequest) -> NewSection {
    NewSection {
        course_id: req.course_id,
        title: req.title,
        description: req.description.and_then(nonempty),
        order_number: req.order_number,
    }
}

pub fn section_patch_from_proto(req: proto::UpdateSectionRequest) -> SectionPatch {
    SectionPatch {
        course_id: req.course_id,
        title: req.title,
        description: req.description,
        order_number: req.order_number,
    }
}
