use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string_len(20)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Credits).integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::CourseCode).string_len(20).not_null())
                    .col(ColumnDef::new(Exams::CourseTitle).string().null())
                    .col(ColumnDef::new(Exams::ExamDate).date().not_null())
                    .col(ColumnDef::new(Exams::StartTime).time().not_null())
                    .col(ColumnDef::new(Exams::EndTime).time().not_null())
                    .col(ColumnDef::new(Exams::VenueNote).text().null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::CourseCode)
                            .to(Courses::Table, Courses::Code)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考场表
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Rooms::RoomCode)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .col(ColumnDef::new(Rooms::Building).string_len(100).null())
                    .col(ColumnDef::new(Rooms::Floor).integer().null())
                    .col(ColumnDef::new(Rooms::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::RollNo)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Department).string_len(100).null())
                    .col(ColumnDef::new(Students::Year).integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建监考老师表
        manager
            .create_table(
                Table::create()
                    .table(Invigilators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invigilators::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invigilators::Name).string().not_null())
                    .col(
                        ColumnDef::new(Invigilators::EmployeeNo)
                            .string_len(100)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Invigilators::Dept).string_len(100).null())
                    .col(
                        ColumnDef::new(Invigilators::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试报名表
        manager
            .create_table(
                Table::create()
                    .table(StudentExams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentExams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentExams::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentExams::ExamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(StudentExams::Status)
                            .string_len(20)
                            .not_null()
                            .default("registered"),
                    )
                    .col(
                        ColumnDef::new(StudentExams::RegisteredAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentExams::Table, StudentExams::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentExams::Table, StudentExams::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建座位分配表
        manager
            .create_table(
                Table::create()
                    .table(SeatAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeatAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SeatAssignments::ExamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatAssignments::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatAssignments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatAssignments::SeatNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatAssignments::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SeatAssignments::Table, SeatAssignments::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SeatAssignments::Table, SeatAssignments::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SeatAssignments::Table, SeatAssignments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建监考老师空闲时间表
        manager
            .create_table(
                Table::create()
                    .table(InvigilatorAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvigilatorAvailability::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvigilatorAvailability::InvigilatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvigilatorAvailability::Date)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvigilatorAvailability::StartTime)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvigilatorAvailability::EndTime)
                            .time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                InvigilatorAvailability::Table,
                                InvigilatorAvailability::InvigilatorId,
                            )
                            .to(Invigilators::Table, Invigilators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建监考安排表
        manager
            .create_table(
                Table::create()
                    .table(InvigilationAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvigilationAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvigilationAssignments::ExamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvigilationAssignments::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvigilationAssignments::InvigilatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvigilationAssignments::Role)
                            .string_len(50)
                            .not_null()
                            .default("invigilator"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                InvigilationAssignments::Table,
                                InvigilationAssignments::ExamId,
                            )
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                InvigilationAssignments::Table,
                                InvigilationAssignments::RoomId,
                            )
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                InvigilationAssignments::Table,
                                InvigilationAssignments::InvigilatorId,
                            )
                            .to(Invigilators::Table, Invigilators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一约束
        manager
            .create_index(
                Index::create()
                    .name("ux_student_exam")
                    .table(StudentExams::Table)
                    .col(StudentExams::StudentId)
                    .col(StudentExams::ExamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_exam_room_seat")
                    .table(SeatAssignments::Table)
                    .col(SeatAssignments::ExamId)
                    .col(SeatAssignments::RoomId)
                    .col(SeatAssignments::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_exam_student")
                    .table(SeatAssignments::Table)
                    .col(SeatAssignments::ExamId)
                    .col(SeatAssignments::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_inv_avail")
                    .table(InvigilatorAvailability::Table)
                    .col(InvigilatorAvailability::InvigilatorId)
                    .col(InvigilatorAvailability::Date)
                    .col(InvigilatorAvailability::StartTime)
                    .col(InvigilatorAvailability::EndTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_inv_assign")
                    .table(InvigilationAssignments::Table)
                    .col(InvigilationAssignments::ExamId)
                    .col(InvigilationAssignments::RoomId)
                    .col(InvigilationAssignments::InvigilatorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .name("idx_student_exams_exam_id")
                    .table(StudentExams::Table)
                    .col(StudentExams::ExamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_capacity")
                    .table(Rooms::Table)
                    .col(Rooms::Capacity)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exams_exam_date")
                    .table(Exams::Table)
                    .col(Exams::ExamDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(InvigilationAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InvigilatorAvailability::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SeatAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentExams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invigilators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Code,
    Title,
    Credits,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    CourseCode,
    CourseTitle,
    ExamDate,
    StartTime,
    EndTime,
    VenueNote,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Rooms {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    RoomCode,
    Capacity,
    Building,
    Floor,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    RollNo,
    Name,
    Department,
    Year,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Invigilators {
    #[sea_orm(iden = "invigilators")]
    Table,
    Id,
    Name,
    EmployeeNo,
    Dept,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentExams {
    #[sea_orm(iden = "student_exams")]
    Table,
    Id,
    StudentId,
    ExamId,
    Status,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum SeatAssignments {
    #[sea_orm(iden = "seat_assignments")]
    Table,
    Id,
    ExamId,
    RoomId,
    StudentId,
    SeatNumber,
    AssignedAt,
}

#[derive(DeriveIden)]
enum InvigilatorAvailability {
    #[sea_orm(iden = "invigilator_availability")]
    Table,
    Id,
    InvigilatorId,
    Date,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
enum InvigilationAssignments {
    #[sea_orm(iden = "invigilation_assignments")]
    Table,
    Id,
    ExamId,
    RoomId,
    InvigilatorId,
    Role,
}
