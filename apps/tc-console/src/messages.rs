//! 界面提示文本。后端给出 `error` 时优先显示后端消息，以下为兜底。

pub const GENERIC_ERROR: &str = "Произошла ошибка";
pub const LOAD_FAILED: &str = "Ошибка загрузки данных. Повторите команду, чтобы попробовать снова.";

pub const CREATE_USER_FAILED: &str = "Ошибка при создании пользователя. Попробуйте снова.";
pub const UPDATE_USER_FAILED: &str = "Ошибка при обновлении пользователя";
pub const CREATE_ORGANIZATION_FAILED: &str = "Ошибка при создании организации. Попробуйте снова.";
pub const UPDATE_ORGANIZATION_FAILED: &str =
    "Ошибка при обновлении организации. Попробуйте снова.";
pub const CREATE_OBJECT_FAILED: &str = "Ошибка при создании объекта. Попробуйте снова.";
pub const UPDATE_OBJECT_FAILED: &str = "Ошибка при обновлении объекта";
pub const CREATE_PERMIT_FAILED: &str = "Ошибка при создании ТУ. Попробуйте снова.";
pub const UPDATE_PERMIT_FAILED: &str = "Ошибка при обновлении ТУ";
pub const DELETE_PERMIT_FAILED: &str = "Ошибка при удалении ТУ";

pub const PERMIT_CREATED: &str = "ТУ успешно создано";
pub const PERMIT_UPDATED: &str = "ТУ успешно обновлено";
pub const PERMIT_DELETED: &str = "ТУ успешно удалено";
pub const NO_DATA: &str = "Нет данных для отображения";
