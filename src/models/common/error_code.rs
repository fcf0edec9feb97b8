// 业务错误码，0 表示成功，写入 ApiResponse.code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    InvalidParameter = 1001,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 考场 2xxx
    RoomNotFound = 2001,
    RoomCreationFailed = 2003,
    RoomDeleteFailed = 2004,

    // 考试 3xxx
    ExamNotFound = 3001,
    ExamCreationFailed = 3002,
    ExamDeleteFailed = 3003,

    // 学生 4xxx
    StudentNotFound = 4001,
    StudentCreationFailed = 4003,
    StudentDeleteFailed = 4004,

    // 监考 5xxx
    InvigilatorNotFound = 5001,
    InvigilatorCreationFailed = 5003,
    InvigilatorDeleteFailed = 5004,
    AvailabilityNotFound = 5011,
    InvigilationNotFound = 5021,

    // 报名与座位 6xxx
    RegistrationFailed = 6001,
    NoRegistrations = 6101,
    SeatAssignmentFailed = 6102,

    // 导出 7xxx
    ExportFailed = 7001,
}
