//! 项目表单状态

use deeploy_client::{Project, ProjectRequest};
use ratatui::layout::Size;

use super::TextInput;

/// 表单输入焦点
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }
}

/// 新建 / 编辑项目表单
#[derive(Debug, Clone, Default)]
pub struct ProjectFormPage {
    /// 编辑时的原项目；`None` 表示新建
    pub seed: Option<Project>,
    pub title: TextInput,
    pub description: TextInput,
    pub focus: FormField,
    /// 已提交，等待结果
    pub submitting: bool,
    /// 字段校验错误
    pub validation: Option<String>,
    /// 请求错误
    pub error: Option<String>,
    pub size: Size,
}

impl ProjectFormPage {
    /// 空表单（新建）
    pub fn new() -> Self {
        Self::default()
    }

    /// 以现有项目填充（编辑）
    pub fn edit(project: Project) -> Self {
        Self {
            title: TextInput::with_value(project.title.clone()),
            description: TextInput::with_value(project.description.clone()),
            seed: Some(project),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.seed.is_some()
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    /// 校验并构造请求体
    pub fn request(&self) -> Result<ProjectRequest, &'static str> {
        if self.title.is_blank() {
            return Err("Title is required");
        }
        Ok(ProjectRequest::new(self.title.trimmed()).with_description(self.description.trimmed()))
    }
}
