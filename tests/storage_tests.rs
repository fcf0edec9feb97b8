mod common;

use std::collections::HashSet;

use common::{add_exam, add_room, add_student, add_students, exam_registrations, memory_storage};
use exam_seater::errors::SeaterError;
use exam_seater::models::invigilators::requests::{
    CreateInvigilationRequest, CreateInvigilatorRequest, NewAvailability,
};
use exam_seater::models::rooms::requests::CreateRoomRequest;

#[tokio::test]
async fn test_seat_five_of_seven_when_capacity_short() {
    let storage = memory_storage().await;
    add_room(&storage, "A", 2).await;
    add_room(&storage, "B", 3).await;
    let students = add_students(&storage, 7).await;
    let exam = add_exam(&storage, "CS101").await;

    let summary = storage
        .register_students(exam.exam_id, None)
        .await
        .expect("registration");
    assert_eq!(summary.registered, 7);

    let result = storage.assign_seats(exam.exam_id).await.expect("seating");
    assert_eq!(result.total, 7);
    assert_eq!(result.seated, 5);
    assert_eq!(result.unseated, 2);
    assert_eq!(result.warning.as_deref(), Some("Not enough seats. 2 unseated"));

    // 大考场优先
    assert_eq!(result.rooms[0].room_code, "B");
    assert_eq!(result.rooms[0].seats.len(), 3);
    assert_eq!(result.rooms[1].room_code, "A");
    assert_eq!(result.rooms[1].seats.len(), 2);

    // 按报名顺序落座，最后两名未分配
    let seated: Vec<i64> = result
        .rooms
        .iter()
        .flat_map(|r| r.seats.iter().map(|s| s.student.student_id))
        .collect();
    let expected: Vec<i64> = students.iter().take(5).map(|s| s.student_id).collect();
    assert_eq!(seated, expected);
}

#[tokio::test]
async fn test_seat_numbers_contiguous_and_unique() {
    let storage = memory_storage().await;
    let small = add_room(&storage, "S1", 4).await;
    let large = add_room(&storage, "L1", 10).await;
    add_students(&storage, 12).await;
    let exam = add_exam(&storage, "MA201").await;
    storage
        .register_students(exam.exam_id, None)
        .await
        .expect("registration");

    let result = storage.assign_seats(exam.exam_id).await.expect("seating");
    assert_eq!(result.seated, 12);
    assert!(result.warning.is_none());

    let seats = storage
        .list_seat_assignments(exam.exam_id, None)
        .await
        .expect("list seats");
    assert_eq!(seats.len(), 12);

    for (room_id, capacity) in [(large.room_id, 10), (small.room_id, 4)] {
        let numbers: Vec<i32> = seats
            .iter()
            .filter(|s| s.room_id == room_id)
            .map(|s| s.seat_number)
            .collect();
        let expected: Vec<i32> = (1..=numbers.len() as i32).collect();
        assert_eq!(numbers, expected);
        assert!(numbers.len() as i32 <= capacity);
    }

    let unique: HashSet<i64> = seats.iter().map(|s| s.student_id).collect();
    assert_eq!(unique.len(), seats.len());

    let only_small = storage
        .list_seat_assignments(exam.exam_id, Some(small.room_id))
        .await
        .expect("list seats by room");
    assert_eq!(only_small.len(), 2);
}

#[tokio::test]
async fn test_reassign_replaces_previous_seats() {
    let storage = memory_storage().await;
    add_room(&storage, "A", 5).await;
    add_students(&storage, 3).await;
    let exam = add_exam(&storage, "PH100").await;
    storage
        .register_students(exam.exam_id, None)
        .await
        .expect("registration");

    let first = storage.assign_seats(exam.exam_id).await.expect("first run");
    let second = storage.assign_seats(exam.exam_id).await.expect("second run");
    assert_eq!(first.rooms, second.rooms);

    let seats = storage
        .list_seat_assignments(exam.exam_id, None)
        .await
        .expect("list seats");
    assert_eq!(seats.len(), 3);
}

#[tokio::test]
async fn test_assign_without_registrations_is_rejected() {
    let storage = memory_storage().await;
    add_room(&storage, "A", 5).await;
    let exam = add_exam(&storage, "EE300").await;

    let err = storage.assign_seats(exam.exam_id).await.unwrap_err();
    assert!(matches!(err, SeaterError::Validation(_)));
    assert_eq!(err.message(), "no registrations for exam");
}

#[tokio::test]
async fn test_assign_unknown_exam_is_not_found() {
    let storage = memory_storage().await;
    let err = storage.assign_seats(999).await.unwrap_err();
    assert!(matches!(err, SeaterError::NotFound(_)));
}

#[tokio::test]
async fn test_assign_with_no_rooms_leaves_everyone_unseated() {
    let storage = memory_storage().await;
    add_students(&storage, 2).await;
    let exam = add_exam(&storage, "CH110").await;
    storage
        .register_students(exam.exam_id, None)
        .await
        .expect("registration");

    let result = storage.assign_seats(exam.exam_id).await.expect("seating");
    assert_eq!(result.seated, 0);
    assert_eq!(result.unseated, 2);
    assert!(result.rooms.is_empty());
}

#[tokio::test]
async fn test_duplicate_registration_is_skipped() {
    let storage = memory_storage().await;
    let students = add_students(&storage, 3).await;
    let exam = add_exam(&storage, "CS102").await;
    let first_two = vec![students[0].student_id, students[1].student_id];

    let summary = storage
        .register_students(exam.exam_id, Some(first_two))
        .await
        .expect("first registration");
    assert_eq!(summary.registered, 2);
    assert_eq!(summary.skipped, 0);

    let summary = storage
        .register_students(exam.exam_id, None)
        .await
        .expect("register everyone");
    assert_eq!(summary.requested, 3);
    assert_eq!(summary.registered, 1);
    assert_eq!(summary.skipped, 2);

    let regs = exam_registrations(&storage, exam.exam_id).await;
    let ids: Vec<i64> = regs.iter().map(|r| r.student_id).collect();
    let expected: Vec<i64> = students.iter().map(|s| s.student_id).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_register_unknown_student_is_not_found() {
    let storage = memory_storage().await;
    let student = add_student(&storage, "R001").await;
    let exam = add_exam(&storage, "CS103").await;

    let err = storage
        .register_students(exam.exam_id, Some(vec![student.student_id, 4242]))
        .await
        .unwrap_err();
    assert!(matches!(err, SeaterError::NotFound(_)));

    // 整批失败，不留下部分报名
    let regs = exam_registrations(&storage, exam.exam_id).await;
    assert!(regs.is_empty());
}

#[tokio::test]
async fn test_delete_student_cascades() {
    let storage = memory_storage().await;
    add_room(&storage, "A", 5).await;
    let students = add_students(&storage, 2).await;
    let exam = add_exam(&storage, "BI120").await;
    storage
        .register_students(exam.exam_id, None)
        .await
        .expect("registration");
    storage.assign_seats(exam.exam_id).await.expect("seating");

    assert!(
        storage
            .delete_student(students[0].student_id)
            .await
            .expect("delete")
    );

    let regs = exam_registrations(&storage, exam.exam_id).await;
    assert_eq!(regs.len(), 1);
    let seats = storage
        .list_seat_assignments(exam.exam_id, None)
        .await
        .expect("list seats");
    assert_eq!(seats.len(), 1);
    assert_eq!(seats[0].student_id, students[1].student_id);

    assert!(
        !storage
            .delete_student(students[0].student_id)
            .await
            .expect("second delete")
    );
}

#[tokio::test]
async fn test_delete_exam_cascades() {
    let storage = memory_storage().await;
    add_room(&storage, "A", 5).await;
    add_students(&storage, 2).await;
    let exam = add_exam(&storage, "GE101").await;
    storage
        .register_students(exam.exam_id, None)
        .await
        .expect("registration");
    storage.assign_seats(exam.exam_id).await.expect("seating");

    assert!(storage.delete_exam(exam.exam_id).await.expect("delete"));
    assert!(storage.list_registrations().await.expect("regs").is_empty());
    assert_eq!(storage.clear_seat_assignments().await.expect("clear"), 0);

    // 课程保留
    let courses = storage.list_courses().await.expect("courses");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course_code, "GE101");
}

#[tokio::test]
async fn test_exam_reuses_existing_course() {
    let storage = memory_storage().await;
    add_exam(&storage, "CS101").await;
    add_exam(&storage, "CS101").await;

    assert_eq!(storage.list_exams().await.expect("exams").len(), 2);
    assert_eq!(storage.list_courses().await.expect("courses").len(), 1);
}

#[tokio::test]
async fn test_duplicate_room_code_conflicts() {
    let storage = memory_storage().await;
    add_room(&storage, "LH-1", 30).await;

    let err = storage
        .create_room(CreateRoomRequest {
            room_code: "LH-1".to_string(),
            capacity: 10,
            building: None,
            floor: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SeaterError::Conflict(_)));
}

#[tokio::test]
async fn test_clear_seats_removes_all_exams() {
    let storage = memory_storage().await;
    add_room(&storage, "A", 10).await;
    add_students(&storage, 3).await;
    let first = add_exam(&storage, "CS201").await;
    let second = add_exam(&storage, "CS202").await;
    for exam_id in [first.exam_id, second.exam_id] {
        storage
            .register_students(exam_id, None)
            .await
            .expect("registration");
        storage.assign_seats(exam_id).await.expect("seating");
    }

    assert_eq!(storage.clear_seat_assignments().await.expect("clear"), 6);
    assert!(
        storage
            .list_seat_assignments(first.exam_id, None)
            .await
            .expect("list")
            .is_empty()
    );
}

#[tokio::test]
async fn test_invigilation_lifecycle() {
    let storage = memory_storage().await;
    let room = add_room(&storage, "A", 10).await;
    let exam = add_exam(&storage, "CS301").await;
    let invigilator = storage
        .create_invigilator(CreateInvigilatorRequest {
            name: "Dr. Rao".to_string(),
            emp: Some("E100".to_string()),
            dept: None,
        })
        .await
        .expect("invigilator");

    let slot = storage
        .create_availability(
            invigilator.invigilator_id,
            NewAvailability {
                date: exam.exam_date,
                start_time: exam.start_time,
                end_time: exam.end_time,
            },
        )
        .await
        .expect("availability");
    assert_eq!(
        storage
            .list_availability(invigilator.invigilator_id)
            .await
            .expect("list availability")
            .len(),
        1
    );

    let assignment = storage
        .create_invigilation(
            exam.exam_id,
            CreateInvigilationRequest {
                room_id: room.room_id,
                invigilator_id: invigilator.invigilator_id,
                role: None,
            },
        )
        .await
        .expect("assignment");
    assert_eq!(assignment.role, "invigilator");

    // 同一考试同一考场不能重复安排同一位老师
    let err = storage
        .create_invigilation(
            exam.exam_id,
            CreateInvigilationRequest {
                room_id: room.room_id,
                invigilator_id: invigilator.invigilator_id,
                role: Some("chief".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SeaterError::Conflict(_)));

    assert!(
        storage
            .delete_invigilator(invigilator.invigilator_id)
            .await
            .expect("delete invigilator")
    );
    assert!(
        storage
            .list_invigilation(exam.exam_id)
            .await
            .expect("list invigilation")
            .is_empty()
    );
    assert!(
        !storage
            .delete_availability(invigilator.invigilator_id, slot.avail_id)
            .await
            .expect("delete availability")
    );
}

// 超过 SQLite 单条语句 32766 个参数上限的报名规模
const LARGE_COHORT: usize = 32_800;

#[tokio::test]
async fn test_large_cohort_registers_and_seats() {
    let storage = memory_storage().await;
    add_room(&storage, "Arena", 40_000).await;
    let students = add_students(&storage, LARGE_COHORT).await;
    let exam = add_exam(&storage, "GEN100").await;

    let ids: Vec<i64> = students.iter().map(|s| s.student_id).collect();
    let summary = storage
        .register_students(exam.exam_id, Some(ids))
        .await
        .expect("explicit registration");
    assert_eq!(summary.registered, LARGE_COHORT);

    let result = storage.assign_seats(exam.exam_id).await.expect("seating");
    assert_eq!(result.seated, LARGE_COHORT);
    assert_eq!(result.unseated, 0);
    assert_eq!(result.rooms.len(), 1);
    assert_eq!(result.rooms[0].seats.len(), LARGE_COHORT);

    let last = &result.rooms[0].seats[LARGE_COHORT - 1];
    assert_eq!(last.seat_number, LARGE_COHORT as i32);
    assert_eq!(last.student.student_id, students[LARGE_COHORT - 1].student_id);
}
