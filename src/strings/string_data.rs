//! Display text for the map manager upload page.
//!
//! Entries are listed in the order the page script declares them. The
//! position of each entry is the discriminant of its [`StringKey`] variant.
//!
//! [`StringKey`]: super::StringKey

/// String definition: (key name, display text)
pub type StringDef = (&'static str, &'static str);

pub const UPLOAD_STRINGS: &[StringDef] = &[
    // Page header and file list
    ("WIFI_TRANS_TITLE", "map manager"),
    ("FILES_ON_DEVICE", "您设备上的文件列表"),
    ("FILENAME", "文件名"),
    ("FILE_SIZE", "大小"),
    ("FILE_OPER", "操作"),
    ("CONFIRM_DELETE_BOOK", "是否删除？"),
    ("DOWNLOAD_FILE", "下载文件"),
    ("DELETE_FILE", "删除文件"),

    // Upload errors
    ("USE_ONE_BROWSER", "无法上传文件，请勿使用多个浏览器窗口同时上传。"),
    ("UPLOAD_FAILED", "上传失败。"),
    ("UNSUPPORTED_FILE_TYPE", "请选择mmap格式的文件。"),
    ("FILE_IN_QUEUE", "文件已经在上传列队中。"),
    ("FILE_EXISTS", "文件已存在，请先删除再重新上传。"),

    // File chooser
    ("YOU_CHOOSE", "您选择了"),
    ("CHOSEN_FILE_COUNT", "个文件，只能上传"),
    ("VALID_CHOSEN_FILE_COUNT", "个文件。\n请选择mmap文件，文件名不能重复。"),
    ("CANCEL", "取消"),
    ("SELECT_YOUR_FILES", "请选择您要上传的文件"),
    ("SUPPORTED_FILE_TYPES", "支持mmap"),
    ("CANNOT_CONNECT_SERVER", "无法连接服务器。"),
    ("DRAG_TO_HERE", "拖拽到此处上传"),
    // The three button labels are consumed separately by the page.
    ("SELECT_BUTTON_LABLE1", "选择文件"),
    ("SELECT_BUTTON_LABLE2", "可同时上传多个文件"),
    ("SELECT_BUTTON_LABLE", "选择文件"),

    // Status and limits
    ("WIFI_AVAILABLE", "WiFi连接已启用"),
    ("EXCEEDS_FILE_SIZE", "无法上传文件，请勿上传大于1024KB的文件。"),
    ("UNSUPPORTED_BROWSER_TYPE", "请使用Chrome、Firefox或Safari浏览器。"),
];
